use eyre::Result;
use tracing::Level;

use self::compiler::{GLSLANG_CMD, ShaderCompiler, SystemLauncher};

//

mod compiler;
mod shader;

//

/// compute shaders compiled on every run, relative to the working directory
const SHADERS: &[&str] = &["simple.comp"];

//

fn main() -> Result<()> {
    color_eyre::install()?;

    let level = if cfg!(debug_assertions) {
        Level::DEBUG
    } else {
        Level::INFO
    };
    tracing_subscriber::fmt().with_max_level(level).init();

    let mut compiler = ShaderCompiler::new(SystemLauncher);
    let report = compiler.compile_all(SHADERS.iter().copied());

    // the exit status of the compiler is reported but never fails the run
    if report.is_clean() {
        tracing::info!("compiled {} shader(s)", report.compiled());
    } else {
        tracing::warn!(
            "{} of {} shader(s) failed, see {GLSLANG_CMD} output above",
            report.failed(),
            report.entries.len()
        );
    }

    Ok(())
}
