// This module drives `uv`, the fast package and project manager.
// uv is used three ways: as a tool that must itself be installed, as a global
// tool installer (`uv tool install`), and as the project manager behind
// `uv add --dev`, `uv run` and `uv sync`.

use colored::Colorize;

use crate::cli::type_enums::StepOutcome;
// Homebrew is preferred; pip is the fallback installer for uv itself.
use crate::installers::{brew, pip};
use crate::libs::errors::SetupError;
// Installs must succeed; version and `uv run` queries may quietly fail.
use crate::libs::runner::{CommandOutput, CommandRunner, probe, run_checked};
use crate::libs::utilities::misc_utils::parse_uv_version;
use crate::schemas::run_context::RunContext;
use crate::{log_debug, log_info};

pub const UV_BIN: &str = "uv";
pub const FORMULA: &str = "uv";

pub fn is_present(ctx: &RunContext, runner: &dyn CommandRunner) -> bool {
    ctx.has_binary(runner, UV_BIN)
}

/// Homebrew first; pip when Homebrew is not available.
pub fn install(ctx: &mut RunContext, runner: &dyn CommandRunner) -> Result<StepOutcome, SetupError> {
    if brew::is_available(ctx, runner) {
        brew::install_formula(ctx, runner, FORMULA)?;
    } else {
        log_info!(
            "[UV] Homebrew not available, falling back to {}",
            "pip".cyan()
        );
        pip::install_package(ctx, runner, "uv")?;
    }
    Ok(StepOutcome::Installed)
}

pub fn upgrade(ctx: &mut RunContext, runner: &dyn CommandRunner) -> Result<StepOutcome, SetupError> {
    if brew::is_available(ctx, runner) {
        brew::upgrade_formula(ctx, runner, FORMULA)?;
    } else {
        log_info!("[UV] Running {}", "uv self update".cyan());
        run_checked(runner, &ctx.interactive(UV_BIN, &["self", "update"]))?;
    }
    Ok(StepOutcome::Upgraded)
}

/// `uv --version`, parsed.
pub fn version(ctx: &RunContext, runner: &dyn CommandRunner) -> Option<String> {
    let output = probe(runner, &ctx.command(UV_BIN, &["--version"]))?;
    let version = parse_uv_version(&output.stdout);
    log_debug!("[UV] Detected version: {:?}", version);
    version
}

/// `uv tool install <package>`: a global, isolated tool install.
pub fn tool_install(
    ctx: &RunContext,
    runner: &dyn CommandRunner,
    package: &str,
) -> Result<(), SetupError> {
    log_info!("[UV] Installing global tool: {}", package.bold());
    run_checked(
        runner,
        &ctx.interactive(UV_BIN, &["tool", "install", package]),
    )
    .map_err(|e| e.with_hint(format!("uv tool install {package}")))?;
    Ok(())
}

pub fn tool_upgrade(
    ctx: &RunContext,
    runner: &dyn CommandRunner,
    package: &str,
) -> Result<(), SetupError> {
    log_info!("[UV] Upgrading global tool: {}", package.bold());
    run_checked(
        runner,
        &ctx.interactive(UV_BIN, &["tool", "upgrade", package]),
    )?;
    Ok(())
}

/// `uv add --dev <package>`, or with `--upgrade-package` to move to the newest allowed version.
pub fn add_dev_dependency(
    ctx: &RunContext,
    runner: &dyn CommandRunner,
    package: &str,
    upgrade: bool,
) -> Result<(), SetupError> {
    let request = if upgrade {
        log_info!("[UV] Upgrading dev dependency: {}", package.bold());
        ctx.interactive(
            UV_BIN,
            &["add", "--dev", "--upgrade-package", package, package],
        )
    } else {
        log_info!("[UV] Adding dev dependency: {}", package.bold());
        ctx.interactive(UV_BIN, &["add", "--dev", package])
    };
    run_checked(runner, &request).map_err(|e| e.with_hint(format!("uv add --dev {package}")))?;
    Ok(())
}

/// Runs a tool inside the project environment and returns its captured output on success.
/// `--no-sync` keeps this read-only: uv must not create or refresh `.venv` here.
pub fn run_in_project(
    ctx: &RunContext,
    runner: &dyn CommandRunner,
    args: &[&str],
) -> Option<CommandOutput> {
    let mut full = vec!["run", "--no-sync"];
    full.extend_from_slice(args);
    probe(runner, &ctx.command(UV_BIN, &full))
}

/// `uv sync`: creates or refreshes `.venv` from the manifest and lockfile.
pub fn sync(ctx: &RunContext, runner: &dyn CommandRunner) -> Result<(), SetupError> {
    log_info!("[UV] Syncing project environment...");
    run_checked(runner, &ctx.interactive(UV_BIN, &["sync"]))
        .map_err(|e| e.with_hint("uv sync"))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::type_enums::Mode;
    use crate::libs::runner::testing::FakeRunner;

    fn ctx() -> RunContext {
        RunContext::new(Mode::Install, "/tmp", "arm64")
    }

    #[test]
    fn install_prefers_brew() {
        let runner = FakeRunner::new().with_binary("brew").with_binary("python3");
        install(&mut ctx(), &runner).unwrap();
        assert!(runner.ran("brew install uv"));
        assert!(!runner.ran("python3 -m pip install uv"));
    }

    #[test]
    fn install_falls_back_to_pip_without_brew() {
        let runner = FakeRunner::new().with_binary("python3");
        install(&mut ctx(), &runner).unwrap();
        assert!(runner.ran("python3 -m pip install uv"));
    }

    #[test]
    fn upgrade_without_brew_self_updates() {
        let runner = FakeRunner::new().with_binary("uv");
        upgrade(&mut ctx(), &runner).unwrap();
        assert!(runner.ran("uv self update"));
    }

    #[test]
    fn dev_dependency_upgrade_variant() {
        let runner = FakeRunner::new().with_binary("uv");
        add_dev_dependency(&ctx(), &runner, "ruff", false).unwrap();
        add_dev_dependency(&ctx(), &runner, "ruff", true).unwrap();
        assert_eq!(
            runner.command_lines(),
            vec![
                "uv add --dev ruff".to_string(),
                "uv add --dev --upgrade-package ruff ruff".to_string(),
            ]
        );
    }

    #[test]
    fn run_in_project_prefixes_run() {
        let runner = FakeRunner::new()
            .with_binary("uv")
            .respond("uv run --no-sync ruff --version", "ruff 0.6.9\n");
        let output = run_in_project(&ctx(), &runner, &["ruff", "--version"]).unwrap();
        assert_eq!(output.stdout, "ruff 0.6.9\n");
    }
}
