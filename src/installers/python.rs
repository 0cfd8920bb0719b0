// The language runtime. Python comes from the Homebrew `python` formula and is
// reached as `python3`; pip (see `pip.rs`) rides along with it.

use colored::Colorize;

use crate::cli::type_enums::StepOutcome;
use crate::installers::brew;
use crate::libs::errors::SetupError;
use crate::libs::runner::{CommandRunner, probe};
use crate::libs::utilities::misc_utils::parse_python_version;
use crate::log_debug;
use crate::schemas::run_context::RunContext;

pub const PYTHON_BIN: &str = "python3";
pub const FORMULA: &str = "python";

pub fn is_present(ctx: &RunContext, runner: &dyn CommandRunner) -> bool {
    ctx.has_binary(runner, PYTHON_BIN)
}

pub fn install(ctx: &mut RunContext, runner: &dyn CommandRunner) -> Result<StepOutcome, SetupError> {
    brew::install_formula(ctx, runner, FORMULA)?;
    Ok(StepOutcome::Installed)
}

pub fn upgrade(ctx: &mut RunContext, runner: &dyn CommandRunner) -> Result<StepOutcome, SetupError> {
    brew::upgrade_formula(ctx, runner, FORMULA)?;
    Ok(StepOutcome::Upgraded)
}

/// `python3 --version`, parsed. `None` when the interpreter is missing or unparseable.
pub fn version(ctx: &RunContext, runner: &dyn CommandRunner) -> Option<String> {
    let output = probe(runner, &ctx.command(PYTHON_BIN, &["--version"]))?;
    let version = parse_python_version(&output.stdout, &output.stderr);
    log_debug!(
        "[Python] Detected version: {}",
        version.as_deref().unwrap_or("unknown").cyan()
    );
    version
}
