use std::fmt;

/// How a run treats tools that are already present.
/// Fixed for the lifetime of the process once parsed from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Install, // Install missing tools, leave present ones alone
    Upgrade, // Install missing tools and upgrade present ones (best-effort)
}

/// Implementation of display formatting for Mode enum.
impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Mode::Install => write!(f, "install"),
            Mode::Upgrade => write!(f, "upgrade"),
        }
    }
}

/// Which summary bucket a validation result counts towards.
/// Only the critical bucket decides the exit status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Criticality {
    Critical, // python3, pip, uv
    Optional, // VS Code, extensions, Ruff, project layout
}

impl fmt::Display for Criticality {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Criticality::Critical => write!(f, "critical"),
            Criticality::Optional => write!(f, "optional"),
        }
    }
}

/// What one ensure step did. Install and upgrade actions report it themselves,
/// so a step that had nothing to act on can say so.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    Installed,
    Upgraded,
    AlreadyPresent,
    UpgradeSkipped,
    Skipped, // Preconditions missing (no manifest, no `code` CLI); nothing was run
}
