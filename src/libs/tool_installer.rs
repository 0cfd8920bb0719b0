//! # Ensure Phase
//!
//! Every managed tool is described by a [`ToolSpec`] (presence probe, install
//! action, optional upgrade action) and a single generic [`ensure`] drives them
//! all in a fixed order.
//!
//! ## Rules
//!
//! - A missing tool is installed. If that install fails the whole run stops.
//! - A present tool is left alone in install mode.
//! - In upgrade mode a present tool is upgraded; failures are logged and skipped.
//! - An action that finds nothing to act on (no manifest, no `code` CLI) reports
//!   [`StepOutcome::Skipped`] and the step is logged as skipped, not as ready.

// For coloring tool names and status words in the progress lines.
use colored::Colorize;

// `Mode` decides whether present tools get upgraded; `StepOutcome` is what each step reports.
use crate::cli::type_enums::{Mode, StepOutcome};
// The per-tool presence checks and actions wired into the step table.
use crate::installers::{brew, pip, project, python, ruff, uv, vscode};
// Fatal failures propagate as `SetupError`.
use crate::libs::errors::SetupError;
// Every presence check and action goes through the runner.
use crate::libs::runner::CommandRunner;
use crate::schemas::run_context::RunContext;
// Custom logging macros.
use crate::{log_debug, log_info, log_warn};

/// "Is this tool here?" Absence is a normal answer, never an error.
pub type PresenceCheck = fn(&RunContext, &dyn CommandRunner) -> bool;
/// Install or upgrade a tool, possibly updating the context (e.g. PATH), and
/// report what was actually done.
pub type Action = fn(&mut RunContext, &dyn CommandRunner) -> Result<StepOutcome, SetupError>;

/// Static description of one managed tool.
pub struct ToolSpec {
    pub name: &'static str,
    pub presence: PresenceCheck,
    pub install: Action,
    pub upgrade: Option<Action>,
}

/// The ensure-phase steps, in execution order.
pub fn ensure_specs() -> [ToolSpec; 8] {
    [
        ToolSpec {
            name: "Homebrew",
            presence: brew::is_available,
            install: brew::install_self,
            upgrade: Some(brew::update),
        },
        ToolSpec {
            name: "Python",
            presence: python::is_present,
            install: python::install,
            upgrade: Some(python::upgrade),
        },
        ToolSpec {
            name: "pip",
            presence: pip::is_present,
            install: pip::install,
            upgrade: Some(pip::upgrade),
        },
        ToolSpec {
            name: "uv",
            presence: uv::is_present,
            install: uv::install,
            upgrade: Some(uv::upgrade),
        },
        ToolSpec {
            name: "VS Code",
            presence: vscode::is_present,
            install: vscode::install,
            upgrade: Some(vscode::upgrade),
        },
        ToolSpec {
            name: "VS Code extensions",
            presence: vscode::extensions_present,
            install: vscode::install_missing_extensions,
            upgrade: None,
        },
        ToolSpec {
            name: "Ruff",
            presence: ruff::is_present,
            install: ruff::install,
            upgrade: Some(ruff::upgrade),
        },
        ToolSpec {
            name: "Project environment",
            presence: project::is_synced,
            install: project::sync,
            upgrade: Some(project::resync),
        },
    ]
}

/// Check, then install-or-upgrade, one tool.
pub fn ensure(
    spec: &ToolSpec,
    ctx: &mut RunContext,
    runner: &dyn CommandRunner,
) -> Result<StepOutcome, SetupError> {
    log_debug!("[Ensure] Checking {}", spec.name);

    if !(spec.presence)(ctx, runner) {
        log_info!("[Ensure] {} not found", spec.name.bold());
        let outcome = (spec.install)(ctx, runner)?;
        report(spec.name, outcome);
        return Ok(outcome);
    }

    match (ctx.mode, spec.upgrade) {
        (Mode::Upgrade, Some(upgrade)) => match upgrade(ctx, runner) {
            Ok(outcome) => {
                report(spec.name, outcome);
                Ok(outcome)
            }
            Err(e) => {
                log_warn!(
                    "[Ensure] Upgrade of {} skipped: {}",
                    spec.name.yellow(),
                    e
                );
                Ok(StepOutcome::UpgradeSkipped)
            }
        },
        _ => {
            report(spec.name, StepOutcome::AlreadyPresent);
            Ok(StepOutcome::AlreadyPresent)
        }
    }
}

/// One status line per step.
fn report(name: &str, outcome: StepOutcome) {
    match outcome {
        StepOutcome::Installed => log_info!("[Ensure] {} {}", name.bold(), "installed".green()),
        StepOutcome::Upgraded => log_info!("[Ensure] {} {}", name.bold(), "upgraded".green()),
        StepOutcome::AlreadyPresent => {
            log_info!("[Ensure] {} {}", name.bold(), "already installed".green())
        }
        StepOutcome::UpgradeSkipped | StepOutcome::Skipped => {
            log_info!("[Ensure] {} {}", name.bold(), "skipped".yellow())
        }
    }
}

/// Runs every ensure step in order, stopping at the first failed install.
pub fn ensure_toolchain(
    ctx: &mut RunContext,
    runner: &dyn CommandRunner,
) -> Result<Vec<(&'static str, StepOutcome)>, SetupError> {
    eprintln!();
    log_info!(
        "[Ensure] Preparing toolchain ({} mode)...",
        ctx.mode.to_string().bright_yellow()
    );

    let mut outcomes = Vec::new();
    for spec in ensure_specs().iter() {
        let outcome = ensure(spec, ctx, runner)?;
        outcomes.push((spec.name, outcome));
    }
    Ok(outcomes)
}
