//! # VS Code Installer Module
//!
//! Installs the editor as a Homebrew cask and manages the two extensions the
//! Python workflow relies on. Extension handling is best-effort: a missing
//! `code` CLI or a failed extension install is reported and the run continues.

// For coloring extension ids and warnings.
use colored::Colorize;

use crate::cli::type_enums::StepOutcome;
// The editor is a Homebrew cask.
use crate::installers::brew;
use crate::libs::errors::SetupError;
use crate::libs::runner::{CommandRunner, probe, run_checked};
// Parsing for `code --version` and `code --list-extensions`.
use crate::libs::utilities::misc_utils::{extension_listed, parse_code_version};
use crate::schemas::run_context::RunContext;
// Custom logging macros.
use crate::{log_debug, log_info, log_warn};

pub const CODE_BIN: &str = "code";
pub const CASK: &str = "visual-studio-code";
/// Python language support and the Ruff integration, in install order.
pub const EXTENSIONS: [&str; 2] = ["ms-python.python", "charliermarsh.ruff"];

pub fn is_present(ctx: &RunContext, runner: &dyn CommandRunner) -> bool {
    ctx.has_binary(runner, CODE_BIN)
}

pub fn install(ctx: &mut RunContext, runner: &dyn CommandRunner) -> Result<StepOutcome, SetupError> {
    brew::install_cask(ctx, runner, CASK)?;
    Ok(StepOutcome::Installed)
}

pub fn upgrade(ctx: &mut RunContext, runner: &dyn CommandRunner) -> Result<StepOutcome, SetupError> {
    brew::upgrade_cask(ctx, runner, CASK)?;
    Ok(StepOutcome::Upgraded)
}

/// First line of `code --version`.
pub fn version(ctx: &RunContext, runner: &dyn CommandRunner) -> Option<String> {
    let output = probe(runner, &ctx.command(CODE_BIN, &["--version"]))?;
    parse_code_version(&output.stdout)
}

/// Raw `code --list-extensions` output, or `None` when the CLI is unavailable.
pub fn installed_extensions(ctx: &RunContext, runner: &dyn CommandRunner) -> Option<String> {
    if !is_present(ctx, runner) {
        return None;
    }
    probe(runner, &ctx.command(CODE_BIN, &["--list-extensions"])).map(|o| o.stdout)
}

/// Per-extension presence, in `EXTENSIONS` order. `None` when the CLI is unavailable.
pub fn extension_status(
    ctx: &RunContext,
    runner: &dyn CommandRunner,
) -> Option<Vec<(&'static str, bool)>> {
    let listing = installed_extensions(ctx, runner)?;
    Some(
        EXTENSIONS
            .iter()
            .map(|id| (*id, extension_listed(&listing, id)))
            .collect(),
    )
}

pub fn extensions_present(ctx: &RunContext, runner: &dyn CommandRunner) -> bool {
    extension_status(ctx, runner)
        .map(|status| status.iter().all(|(_, present)| *present))
        .unwrap_or(false)
}

pub fn install_extension(
    ctx: &RunContext,
    runner: &dyn CommandRunner,
    extension_id: &str,
) -> Result<(), SetupError> {
    log_info!("[VS Code] Installing extension: {}", extension_id.bold());
    run_checked(
        runner,
        &ctx.interactive(CODE_BIN, &["--install-extension", extension_id]),
    )
    .map_err(|e| e.with_hint(format!("code --install-extension {extension_id}")))?;
    Ok(())
}

/// Installs whichever extensions are missing. Never fails the run; without the
/// `code` CLI nothing is attempted and the step reports `Skipped`.
pub fn install_missing_extensions(
    ctx: &mut RunContext,
    runner: &dyn CommandRunner,
) -> Result<StepOutcome, SetupError> {
    let Some(status) = extension_status(ctx, runner) else {
        log_warn!(
            "[VS Code] '{}' CLI not available; skipping extensions. Open VS Code and run 'Shell Command: Install code command in PATH'.",
            CODE_BIN.yellow()
        );
        return Ok(StepOutcome::Skipped);
    };

    for (extension_id, present) in status {
        if present {
            log_debug!("[VS Code] Extension {} already installed", extension_id);
            continue;
        }
        if let Err(e) = install_extension(ctx, runner, extension_id) {
            log_warn!(
                "[VS Code] Could not install {}: {}",
                extension_id.yellow(),
                e
            );
        }
    }
    Ok(StepOutcome::Installed)
}
