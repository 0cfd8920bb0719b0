//! # Bootstrap Command
//!
//! The whole run in one place: ensure every tool, validate the result, print the
//! summary, and turn it into an exit status.
//!
//! ## Workflow
//!
//! 1. Build a [`RunContext`] from the working directory, host architecture and settings.
//! 2. Ensure phase: install what is missing; in upgrade mode upgrade what is present.
//! 3. Validate phase: seven read-only checks, tallied into critical/optional buckets.
//! 4. Summary: exit 0 when every critical check passed, 1 otherwise.
//!
//! A failed mandatory install stops the run before validation and exits 1.

// For highlighting the mode and the fatal error line.
use colored::Colorize;

use crate::cli::type_enums::Mode;
use crate::libs::errors::SetupError;
// Real runs spawn processes; tests pass a scripted runner to `execute`.
use crate::libs::runner::{CommandRunner, SystemRunner};
use crate::libs::settings::Settings;
// The three phases, in order.
use crate::libs::summary::print_summary;
use crate::libs::tool_installer::ensure_toolchain;
use crate::libs::validator::validate_toolchain;
use crate::schemas::run_context::RunContext;
// Custom logging macros.
use crate::{log_debug, log_error, log_info};

/// Entry point from `main`. Returns the process exit status.
pub fn run(mode: Mode, settings: &Settings) -> i32 {
    log_info!(
        "[Bootstrap] Starting Python toolchain setup in {} mode",
        mode.to_string().bright_yellow().bold()
    );

    let ctx = match RunContext::from_environment(mode, settings) {
        Ok(ctx) => ctx,
        Err(e) => return report_fatal(&e),
    };
    log_debug!(
        "[Bootstrap] Project root: {}, architecture: {}, profile: {:?}",
        ctx.project_root.display(),
        ctx.arch,
        ctx.profile_path
    );

    match execute(ctx, &SystemRunner) {
        Ok(code) => code,
        Err(e) => report_fatal(&e),
    }
}

/// Ensure, validate, summarize. Errors out only on a fatal ensure-phase failure.
pub fn execute(mut ctx: RunContext, runner: &dyn CommandRunner) -> Result<i32, SetupError> {
    ensure_toolchain(&mut ctx, runner)?;
    validate_toolchain(&mut ctx, runner);
    let verdict = print_summary(&ctx.tally);
    log_debug!("[Bootstrap] Verdict: {:?}", verdict);
    Ok(verdict.exit_code())
}

fn report_fatal(error: &SetupError) -> i32 {
    log_error!("{}", error.to_string().red());
    if let Some(hint) = error.hint() {
        log_info!("Try: {}", hint.cyan());
    }
    1
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::libs::paths::{MANIFEST_FILE, VENV_DIR, VERSION_PIN_FILE};
    use crate::libs::runner::testing::FakeRunner;
    use std::fs;
    use tempfile::TempDir;

    fn provisioned_runner() -> FakeRunner {
        FakeRunner::new()
            .with_binary("brew")
            .with_binary("python3")
            .with_binary("uv")
            .with_binary("code")
            .respond("python3 --version", "Python 3.12.4\n")
            .respond("python3 -m pip --version", "pip 24.0 from /x (python 3.12)\n")
            .respond("uv --version", "uv 0.4.18 (Homebrew 2024-10-01)\n")
            .respond("code --version", "1.94.2\n")
            .respond(
                "code --list-extensions",
                "ms-python.python\ncharliermarsh.ruff\n",
            )
            .respond("uv run --no-sync ruff --version", "ruff 0.6.9\n")
    }

    #[test]
    fn full_project_exits_zero() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(MANIFEST_FILE), "[project]\n").unwrap();
        fs::write(dir.path().join(VERSION_PIN_FILE), "3.12\n").unwrap();
        fs::create_dir(dir.path().join(VENV_DIR)).unwrap();
        let ctx = RunContext::new(Mode::Install, dir.path(), "arm64");

        assert_eq!(execute(ctx, &provisioned_runner()).unwrap(), 0);
    }

    #[test]
    fn missing_optional_items_still_exit_zero() {
        // No project here, so Ruff (global lookup) and the layout check both fail.
        let dir = TempDir::new().unwrap();
        let ctx = RunContext::new(Mode::Install, dir.path(), "arm64");
        let runner = provisioned_runner().installs("brew install ruff", "ruff");

        assert_eq!(execute(ctx, &runner).unwrap(), 0);
        assert!(runner.ran("brew install ruff"));
    }

    #[test]
    fn missing_critical_tool_exits_one() {
        let dir = TempDir::new().unwrap();
        let ctx = RunContext::new(Mode::Install, dir.path(), "arm64");
        // uv is on PATH but `uv --version` fails.
        let runner = FakeRunner::new()
            .with_binary("brew")
            .with_binary("python3")
            .with_binary("uv")
            .with_binary("ruff")
            .respond("python3 --version", "Python 3.12.4\n")
            .respond("python3 -m pip --version", "pip 24.0 from /x (python 3.12)\n")
            .fail("uv --version", 1);

        assert_eq!(execute(ctx, &runner).unwrap(), 1);
    }

    #[test]
    fn fatal_install_skips_validation() {
        let dir = TempDir::new().unwrap();
        let ctx = RunContext::new(Mode::Install, dir.path(), "arm64");
        let runner = FakeRunner::new()
            .with_binary("brew")
            .fail("brew install python", 1);

        let err = execute(ctx, &runner).unwrap_err();
        assert_eq!(report_fatal(&err), 1);
        assert!(!runner.ran("python3 --version"));
    }
}
