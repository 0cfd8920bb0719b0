// This module provides the installation logic around `pip`, the runtime's own package installer.
// pip is always driven as `python3 -m pip` so it matches the interpreter found on PATH.

use colored::Colorize;

use crate::cli::type_enums::StepOutcome;
// pip always runs as a module of the same interpreter.
use crate::installers::python::PYTHON_BIN;
use crate::libs::errors::SetupError;
use crate::libs::runner::{CommandRunner, probe, run_checked};
use crate::libs::utilities::misc_utils::parse_pip_version;
use crate::schemas::run_context::RunContext;
use crate::{log_debug, log_info};

pub fn is_present(ctx: &RunContext, runner: &dyn CommandRunner) -> bool {
    version(ctx, runner).is_some()
}

/// Bootstraps pip with `ensurepip`.
pub fn install(ctx: &mut RunContext, runner: &dyn CommandRunner) -> Result<StepOutcome, SetupError> {
    log_info!("[Pip] Bootstrapping pip with {}", "ensurepip".cyan());
    run_checked(
        runner,
        &ctx.interactive(PYTHON_BIN, &["-m", "ensurepip", "--upgrade"]),
    )
    .map_err(|e| e.with_hint("python3 -m ensurepip --upgrade"))?;
    Ok(StepOutcome::Installed)
}

/// Upgrades pip itself.
pub fn upgrade(ctx: &mut RunContext, runner: &dyn CommandRunner) -> Result<StepOutcome, SetupError> {
    log_info!("[Pip] Upgrading pip...");
    run_checked(
        runner,
        &ctx.interactive(PYTHON_BIN, &["-m", "pip", "install", "--upgrade", "pip"]),
    )?;
    Ok(StepOutcome::Upgraded)
}

/// `python3 -m pip install <package>`; the fallback installer when Homebrew is missing.
pub fn install_package(
    ctx: &RunContext,
    runner: &dyn CommandRunner,
    package: &str,
) -> Result<(), SetupError> {
    log_info!("[Pip] Installing package: {}", package.bold());
    run_checked(
        runner,
        &ctx.interactive(PYTHON_BIN, &["-m", "pip", "install", package]),
    )
    .map_err(|e| e.with_hint(format!("python3 -m pip install {package}")))?;
    Ok(())
}

/// `python3 -m pip --version`, parsed.
pub fn version(ctx: &RunContext, runner: &dyn CommandRunner) -> Option<String> {
    let output = probe(runner, &ctx.command(PYTHON_BIN, &["-m", "pip", "--version"]))?;
    let version = parse_pip_version(&output.stdout);
    log_debug!("[Pip] Detected version: {:?}", version);
    version
}
