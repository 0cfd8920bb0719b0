// Project environment sync. The program never creates a project itself; it only
// materializes `.venv` for an existing `pyproject.toml`, and re-syncs on upgrade.

use colored::Colorize;

use crate::cli::type_enums::StepOutcome;
use crate::installers::uv;
use crate::libs::errors::SetupError;
use crate::libs::paths::MANIFEST_FILE;
use crate::libs::runner::CommandRunner;
use crate::log_info;
use crate::schemas::run_context::RunContext;

/// Synced means both the manifest and the virtual environment exist.
pub fn is_synced(ctx: &RunContext, _runner: &dyn CommandRunner) -> bool {
    ctx.project_detected() && ctx.venv_present()
}

/// Without a manifest this only prints a hint and reports `Skipped`. With one,
/// `uv sync` creates `.venv` whatever the mode.
pub fn sync(ctx: &mut RunContext, runner: &dyn CommandRunner) -> Result<StepOutcome, SetupError> {
    if !ctx.project_detected() {
        log_info!(
            "[Project] No {} here. Start a project with: {}",
            MANIFEST_FILE.bold(),
            "uv init".cyan()
        );
        return Ok(StepOutcome::Skipped);
    }
    log_info!("[Project] Creating virtual environment with {}", "uv sync".cyan());
    uv::sync(ctx, runner)?;
    Ok(StepOutcome::Installed)
}

/// Re-sync an existing environment (upgrade mode only).
pub fn resync(ctx: &mut RunContext, runner: &dyn CommandRunner) -> Result<StepOutcome, SetupError> {
    uv::sync(ctx, runner)?;
    Ok(StepOutcome::Upgraded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::type_enums::Mode;
    use crate::libs::paths::VENV_DIR;
    use crate::libs::runner::testing::FakeRunner;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn no_manifest_means_hint_only() {
        let dir = TempDir::new().unwrap();
        let mut ctx = RunContext::new(Mode::Upgrade, dir.path(), "arm64");
        let runner = FakeRunner::new().with_binary("uv");

        assert_eq!(sync(&mut ctx, &runner).unwrap(), StepOutcome::Skipped);
        assert!(runner.command_lines().is_empty());
        assert!(!is_synced(&ctx, &runner));
    }

    #[test]
    fn manifest_without_venv_syncs() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(MANIFEST_FILE), "[project]\n").unwrap();
        let mut ctx = RunContext::new(Mode::Install, dir.path(), "arm64");
        let runner = FakeRunner::new().with_binary("uv");

        assert!(!is_synced(&ctx, &runner));
        assert_eq!(sync(&mut ctx, &runner).unwrap(), StepOutcome::Installed);
        assert!(runner.ran("uv sync"));
    }

    #[test]
    fn synced_requires_both_files() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(MANIFEST_FILE), "[project]\n").unwrap();
        fs::create_dir(dir.path().join(VENV_DIR)).unwrap();
        let ctx = RunContext::new(Mode::Install, dir.path(), "arm64");
        assert!(is_synced(&ctx, &FakeRunner::new()));
    }
}
