// The linter/formatter. Inside a project (a `pyproject.toml` in the working
// directory) Ruff is a dev dependency managed by uv; outside one it is a global tool.

use std::fmt;

use crate::cli::type_enums::StepOutcome;
use crate::installers::{brew, uv};
use crate::libs::errors::SetupError;
use crate::libs::runner::{CommandRunner, probe};
use crate::libs::utilities::misc_utils::parse_ruff_version;
use crate::log_debug;
use crate::schemas::run_context::RunContext;

pub const RUFF_BIN: &str = "ruff";
pub const PACKAGE: &str = "ruff";

/// Where a Ruff version came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    Project,
    Global,
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Scope::Project => write!(f, "project"),
            Scope::Global => write!(f, "global"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinterVersion {
    pub version: String,
    pub scope: Scope,
}

/// `uv run --no-sync ruff --version` inside the project.
pub fn project_version(ctx: &RunContext, runner: &dyn CommandRunner) -> Option<String> {
    let output = uv::run_in_project(ctx, runner, &[RUFF_BIN, "--version"])?;
    parse_ruff_version(&output.stdout)
}

/// `ruff --version` from PATH.
pub fn global_version(ctx: &RunContext, runner: &dyn CommandRunner) -> Option<String> {
    if !ctx.has_binary(runner, RUFF_BIN) {
        return None;
    }
    let output = probe(runner, &ctx.command(RUFF_BIN, &["--version"]))?;
    parse_ruff_version(&output.stdout)
}

/// The project-scoped version wins whenever a manifest exists and it reports one;
/// the global install is only consulted otherwise.
pub fn resolve_version(ctx: &RunContext, runner: &dyn CommandRunner) -> Option<LinterVersion> {
    if ctx.project_detected() {
        if let Some(version) = project_version(ctx, runner) {
            return Some(LinterVersion {
                version,
                scope: Scope::Project,
            });
        }
        log_debug!("[Ruff] Project-scoped lookup failed; trying the global install");
    }
    global_version(ctx, runner).map(|version| LinterVersion {
        version,
        scope: Scope::Global,
    })
}

/// Inside a project Ruff only counts when the existing `.venv` can run it; a
/// missing `.venv` is left for the project step to create.
pub fn is_present(ctx: &RunContext, runner: &dyn CommandRunner) -> bool {
    if ctx.project_detected() {
        ctx.venv_present() && project_version(ctx, runner).is_some()
    } else {
        ctx.has_binary(runner, RUFF_BIN)
    }
}

pub fn install(ctx: &mut RunContext, runner: &dyn CommandRunner) -> Result<StepOutcome, SetupError> {
    if ctx.project_detected() {
        uv::add_dev_dependency(ctx, runner, PACKAGE, false)?;
    } else if brew::is_available(ctx, runner) {
        brew::install_formula(ctx, runner, PACKAGE)?;
    } else {
        uv::tool_install(ctx, runner, PACKAGE)?;
    }
    Ok(StepOutcome::Installed)
}

pub fn upgrade(ctx: &mut RunContext, runner: &dyn CommandRunner) -> Result<StepOutcome, SetupError> {
    if ctx.project_detected() {
        uv::add_dev_dependency(ctx, runner, PACKAGE, true)?;
    } else if brew::is_available(ctx, runner) {
        brew::upgrade_formula(ctx, runner, PACKAGE)?;
    } else {
        uv::tool_upgrade(ctx, runner, PACKAGE)?;
    }
    Ok(StepOutcome::Upgraded)
}
