//! # Homebrew Installer Module
//!
//! Homebrew is the package manager every other step prefers. This module installs
//! Homebrew itself, wires it into the shell on Apple Silicon, and wraps the
//! `brew install` / `brew upgrade` / `brew update` calls the other installers use.
//!
//! ## Apple Silicon
//!
//! On arm64 Homebrew lives in `/opt/homebrew`, which is not on the default PATH.
//! After installing it we append the shellenv line to the login profile and put
//! `/opt/homebrew/bin` in front of the PATH carried by [`RunContext`], so the
//! steps that follow can find `brew` without a new shell.

// For the Apple Silicon prefix directories prepended to PATH.
use std::path::Path;

// For coloring formula names and the install URL.
use colored::Colorize;

use crate::cli::type_enums::StepOutcome;
// Writes the shellenv line into the login profile.
use crate::installers::shellrc;
use crate::libs::errors::SetupError;
use crate::libs::runner::{CommandRunner, run_checked};
// Decides whether the shell profile needs touching at all.
use crate::libs::utilities::platform::is_apple_silicon;
use crate::schemas::run_context::RunContext;
use crate::{log_debug, log_info, log_warn};

pub const BREW_BIN: &str = "brew";
/// Official install script.
pub const INSTALL_SCRIPT_URL: &str =
    "https://raw.githubusercontent.com/Homebrew/install/HEAD/install.sh";
pub const APPLE_SILICON_BIN: &str = "/opt/homebrew/bin";
pub const APPLE_SILICON_SBIN: &str = "/opt/homebrew/sbin";

/// The documented one-liner; run through `/bin/bash -c` so the command substitution happens in a shell.
pub fn install_command() -> String {
    format!("/bin/bash -c \"$(curl -fsSL {INSTALL_SCRIPT_URL})\"")
}

/// The line added to the login profile on Apple Silicon.
pub fn shellenv_line() -> String {
    format!("eval \"$({APPLE_SILICON_BIN}/brew shellenv)\"")
}

pub fn is_available(ctx: &RunContext, runner: &dyn CommandRunner) -> bool {
    ctx.has_binary(runner, BREW_BIN)
}

/// Installs Homebrew with the official script, then makes it reachable for the rest of the run.
pub fn install_self(ctx: &mut RunContext, runner: &dyn CommandRunner) -> Result<StepOutcome, SetupError> {
    log_info!(
        "[Brew] Installing Homebrew from {}",
        INSTALL_SCRIPT_URL.cyan()
    );
    let script = install_command();
    run_checked(runner, &ctx.interactive("/bin/bash", &["-c", &script]))
        .map_err(|e| e.with_hint(script.clone()))?;

    configure_shell_environment(ctx)?;
    log_info!("[Brew] {}", "Homebrew installed".green());
    Ok(StepOutcome::Installed)
}

/// Appends the shellenv line to the profile and updates the carried PATH. No-op off Apple Silicon.
pub fn configure_shell_environment(ctx: &mut RunContext) -> Result<(), SetupError> {
    if !is_apple_silicon(&ctx.arch) {
        log_debug!(
            "[Brew] Architecture '{}' uses the default prefix; no shell setup needed",
            ctx.arch
        );
        return Ok(());
    }

    let line = shellenv_line();
    match ctx.profile_path.clone() {
        Some(profile) => {
            shellrc::ensure_line(&profile, &line)?;
        }
        None => {
            log_warn!(
                "[Brew] No shell profile available; add this line manually: {}",
                line.yellow()
            );
        }
    }

    ctx.prepend_path(&[Path::new(APPLE_SILICON_BIN), Path::new(APPLE_SILICON_SBIN)]);
    log_debug!("[Brew] PATH now starts with {}", APPLE_SILICON_BIN);
    Ok(())
}

/// `brew update`: the package manager's own upgrade action.
pub fn update(ctx: &mut RunContext, runner: &dyn CommandRunner) -> Result<StepOutcome, SetupError> {
    log_info!("[Brew] Updating Homebrew...");
    run_checked(runner, &ctx.interactive(BREW_BIN, &["update"]))?;
    Ok(StepOutcome::Upgraded)
}

pub fn install_formula(
    ctx: &RunContext,
    runner: &dyn CommandRunner,
    formula: &str,
) -> Result<(), SetupError> {
    require_brew(ctx, runner, formula)?;
    log_info!("[Brew] Installing formula: {}", formula.bold());
    run_checked(runner, &ctx.interactive(BREW_BIN, &["install", formula]))
        .map_err(|e| e.with_hint(format!("brew install {formula}")))?;
    Ok(())
}

pub fn install_cask(
    ctx: &RunContext,
    runner: &dyn CommandRunner,
    cask: &str,
) -> Result<(), SetupError> {
    require_brew(ctx, runner, cask)?;
    log_info!("[Brew] Installing cask: {}", cask.bold());
    run_checked(
        runner,
        &ctx.interactive(BREW_BIN, &["install", "--cask", cask]),
    )
    .map_err(|e| e.with_hint(format!("brew install --cask {cask}")))?;
    Ok(())
}

pub fn upgrade_formula(
    ctx: &RunContext,
    runner: &dyn CommandRunner,
    formula: &str,
) -> Result<(), SetupError> {
    log_info!("[Brew] Upgrading formula: {}", formula.bold());
    run_checked(runner, &ctx.interactive(BREW_BIN, &["upgrade", formula]))?;
    Ok(())
}

pub fn upgrade_cask(
    ctx: &RunContext,
    runner: &dyn CommandRunner,
    cask: &str,
) -> Result<(), SetupError> {
    log_info!("[Brew] Upgrading cask: {}", cask.bold());
    run_checked(
        runner,
        &ctx.interactive(BREW_BIN, &["upgrade", "--cask", cask]),
    )?;
    Ok(())
}

fn require_brew(
    ctx: &RunContext,
    runner: &dyn CommandRunner,
    package: &str,
) -> Result<(), SetupError> {
    if is_available(ctx, runner) {
        return Ok(());
    }
    Err(SetupError::MissingPrerequisite {
        tool: "Homebrew package",
        reason: format!("'{package}' needs Homebrew, which is not on PATH"),
        hint: Some(install_command()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::type_enums::Mode;
    use crate::libs::runner::testing::FakeRunner;
    use std::env;
    use std::ffi::OsString;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn apple_silicon_install_updates_profile_and_path() {
        let dir = TempDir::new().unwrap();
        let profile = dir.path().join(".zprofile");
        let mut ctx = RunContext::new(Mode::Install, dir.path(), "arm64").with_profile(&profile);
        ctx.path_env = Some(OsString::from("/usr/bin:/bin"));
        let runner = FakeRunner::new();

        install_self(&mut ctx, &runner).unwrap();

        assert_eq!(
            runner.command_lines()[0],
            format!("/bin/bash -c {}", install_command())
        );
        let contents = fs::read_to_string(&profile).unwrap();
        assert!(contents.contains(&shellenv_line()));
        let first = env::split_paths(ctx.path_env.as_ref().unwrap()).next();
        assert_eq!(first, Some(PathBuf::from(APPLE_SILICON_BIN)));
    }

    #[test]
    fn intel_install_leaves_profile_alone() {
        let dir = TempDir::new().unwrap();
        let profile = dir.path().join(".zprofile");
        let mut ctx = RunContext::new(Mode::Install, dir.path(), "x86_64").with_profile(&profile);
        ctx.path_env = Some(OsString::from("/usr/bin"));

        install_self(&mut ctx, &FakeRunner::new()).unwrap();

        assert!(!profile.exists());
        assert_eq!(ctx.path_env, Some(OsString::from("/usr/bin")));
    }

    #[test]
    fn shell_setup_is_idempotent() {
        let dir = TempDir::new().unwrap();
        let profile = dir.path().join(".zprofile");
        let mut ctx = RunContext::new(Mode::Install, dir.path(), "aarch64").with_profile(&profile);

        configure_shell_environment(&mut ctx).unwrap();
        configure_shell_environment(&mut ctx).unwrap();

        let contents = fs::read_to_string(&profile).unwrap();
        assert_eq!(contents.matches("brew shellenv").count(), 1);
    }

    #[test]
    fn failed_install_script_is_fatal_with_hint() {
        let dir = TempDir::new().unwrap();
        let mut ctx = RunContext::new(Mode::Install, dir.path(), "arm64");
        let runner = FakeRunner::new().fail(&format!("/bin/bash -c {}", install_command()), 1);

        let err = install_self(&mut ctx, &runner).unwrap_err();
        assert!(err.hint().unwrap().contains("install.sh"));
    }

    #[test]
    fn formula_install_without_brew_is_a_missing_prerequisite() {
        let ctx = RunContext::new(Mode::Install, "/tmp", "arm64");
        let err = install_formula(&ctx, &FakeRunner::new(), "python").unwrap_err();
        assert!(matches!(err, SetupError::MissingPrerequisite { .. }));
    }
}
