use std::fmt;

//

/// suffix appended to a source filename to name its compiled output
pub const SPV_SUFFIX: &str = ".spv";

//

/// a shader source file, relative to the current working directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShaderSource {
    name: String,
}

impl ShaderSource {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// `simple.comp` compiles to `simple.comp.spv`, the extension is kept
    pub fn output_name(&self) -> String {
        format!("{}{SPV_SUFFIX}", self.name)
    }
}

impl From<&str> for ShaderSource {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl fmt::Display for ShaderSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

//
