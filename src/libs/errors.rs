// Error type shared by the ensure and validate phases.
// Only fatal conditions are represented here; best-effort steps log a warning
// at the call site and keep going.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SetupError {
    /// A command-line token that is not `--upgrade`, `--help` or `-h`.
    #[error("Unknown option: {0}")]
    UnknownOption(String),

    /// Any other argument parsing failure (e.g. a flag given twice).
    #[error("Invalid usage: {0}")]
    Usage(String),

    #[error("Could not determine the current working directory: {0}")]
    WorkingDirectory(#[source] io::Error),

    /// The collaborator binary could not be launched at all.
    #[error("Failed to execute '{command}': {source}")]
    Spawn {
        command: String,
        #[source]
        source: io::Error,
    },

    /// The collaborator ran but reported failure.
    #[error("'{command}' failed with exit code {code}")]
    CommandFailed {
        command: String,
        code: i32,
        hint: Option<String>,
    },

    /// An install action needs a tool that is not available.
    #[error("{tool} cannot be installed: {reason}")]
    MissingPrerequisite {
        tool: &'static str,
        reason: String,
        hint: Option<String>,
    },

    #[error("Failed to update shell profile {}: {source}", path.display())]
    Profile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl SetupError {
    /// The exact command a user can run next, when one is known.
    pub fn hint(&self) -> Option<&str> {
        match self {
            SetupError::UnknownOption(_) | SetupError::Usage(_) => {
                Some("setup-pytoolchain --help")
            }
            SetupError::CommandFailed { hint, .. } | SetupError::MissingPrerequisite { hint, .. } => {
                hint.as_deref()
            }
            SetupError::Profile { .. } => {
                Some("echo 'eval \"$(/opt/homebrew/bin/brew shellenv)\"' >> ~/.zprofile")
            }
            SetupError::WorkingDirectory(_) | SetupError::Spawn { .. } => None,
        }
    }

    /// Attaches a remediation hint to a failed command.
    pub fn with_hint(self, new_hint: impl Into<String>) -> Self {
        match self {
            SetupError::CommandFailed { command, code, .. } => SetupError::CommandFailed {
                command,
                code,
                hint: Some(new_hint.into()),
            },
            other => other,
        }
    }
}
