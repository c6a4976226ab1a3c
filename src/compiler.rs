use std::{
    fmt, io,
    process::{Command, ExitStatus},
};

use crate::shader::ShaderSource;

//

/// looked up through `PATH`
pub const GLSLANG_CMD: &str = "glslangValidator";

//

/// one planned run of the external compiler
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<String>,
}

impl Invocation {
    /// `glslangValidator -V <shader> -o <shader>.spv`
    pub fn for_shader(shader: &ShaderSource) -> Self {
        Self {
            program: GLSLANG_CMD.to_owned(),
            args: vec![
                "-V".to_owned(),
                shader.name().to_owned(),
                "-o".to_owned(),
                shader.output_name(),
            ],
        }
    }

    pub fn command(&self) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args);
        cmd
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.program)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

//

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Compiled,
    /// `code` is `None` if the process was killed by a signal
    Failed { code: Option<i32> },
    NotLaunched { reason: String },
}

impl Outcome {
    pub fn from_status(status: io::Result<ExitStatus>) -> Self {
        match status {
            Ok(status) if status.success() => Self::Compiled,
            Ok(status) => Self::Failed {
                code: status.code(),
            },
            Err(err) => Self::NotLaunched {
                reason: err.to_string(),
            },
        }
    }

    pub fn is_compiled(&self) -> bool {
        matches!(self, Self::Compiled)
    }
}

//

/// runs an invocation to completion, blocking the caller
pub trait Launcher {
    fn launch(&mut self, invocation: &Invocation) -> Outcome;
}

impl<L: Launcher + ?Sized> Launcher for &mut L {
    fn launch(&mut self, invocation: &Invocation) -> Outcome {
        (**self).launch(invocation)
    }
}

/// spawns real processes, stdio is inherited so the compiler's own
/// diagnostics go straight to the terminal
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemLauncher;

impl Launcher for SystemLauncher {
    fn launch(&mut self, invocation: &Invocation) -> Outcome {
        Outcome::from_status(invocation.command().status())
    }
}

//

#[derive(Debug, Default)]
pub struct BatchReport {
    pub entries: Vec<(ShaderSource, Outcome)>,
}

impl BatchReport {
    pub fn compiled(&self) -> usize {
        self.entries.iter().filter(|(_, o)| o.is_compiled()).count()
    }

    pub fn failed(&self) -> usize {
        self.entries.len() - self.compiled()
    }

    pub fn is_clean(&self) -> bool {
        self.failed() == 0
    }
}

//

pub struct ShaderCompiler<L> {
    launcher: L,
}

impl<L: Launcher> ShaderCompiler<L> {
    pub fn new(launcher: L) -> Self {
        Self { launcher }
    }

    pub fn compile(&mut self, shader: &ShaderSource) -> Outcome {
        let invocation = Invocation::for_shader(shader);
        tracing::debug!("running `{invocation}`");

        let outcome = self.launcher.launch(&invocation);
        match &outcome {
            Outcome::Compiled => tracing::info!("compiled {shader} -> {}", shader.output_name()),
            Outcome::Failed { code: Some(code) } => {
                tracing::warn!("{GLSLANG_CMD} exited with code {code} for {shader}")
            }
            Outcome::Failed { code: None } => {
                tracing::warn!("{GLSLANG_CMD} was terminated by a signal for {shader}")
            }
            Outcome::NotLaunched { reason } => {
                tracing::error!("failed to run {GLSLANG_CMD} for {shader}: {reason}")
            }
        }

        outcome
    }

    /// compiles every shader in order, a failure never stops the batch
    pub fn compile_all<I>(&mut self, shaders: I) -> BatchReport
    where
        I: IntoIterator,
        I::Item: Into<ShaderSource>,
    {
        let mut report = BatchReport::default();
        for shader in shaders {
            let shader = shader.into();
            let outcome = self.compile(&shader);
            report.entries.push((shader, outcome));
        }
        report
    }
}

//
