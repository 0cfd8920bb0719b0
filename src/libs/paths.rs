// Provides `PathBuf` for working with file paths.
use std::path::PathBuf;
// Imports the `Colorize` trait for adding color to console output.
use colored::Colorize;
// Custom logging macros for various log levels.
use crate::{log_debug, log_warn};

/// Project manifest declaring dependencies and metadata.
pub const MANIFEST_FILE: &str = "pyproject.toml";
/// Pins the interpreter version the project expects.
pub const VERSION_PIN_FILE: &str = ".python-version";
/// Project-local virtual environment created by `uv sync`.
pub const VENV_DIR: &str = ".venv";
/// Login profile that receives the Homebrew shellenv line.
pub const DEFAULT_PROFILE: &str = ".zprofile";

/// Resolves the shell profile that should receive the Homebrew shellenv line.
///
/// # Arguments
/// * `profile_override`: A path from `SETUP_PYTOOLCHAIN_PROFILE`, tilde-expanded when present.
///
/// # Returns
/// The override when given, otherwise `~/.zprofile`. `None` when no home directory can be found.
pub fn resolve_profile_path(profile_override: Option<&str>) -> Option<PathBuf> {
    if let Some(raw) = profile_override.filter(|p| !p.trim().is_empty()) {
        let expanded = PathBuf::from(shellexpand::tilde(raw.trim()).into_owned());
        log_debug!(
            "[Paths] Using profile override: {}",
            expanded.display().to_string().cyan()
        );
        return Some(expanded);
    }

    match dirs::home_dir() {
        Some(home) => {
            let profile = home.join(DEFAULT_PROFILE);
            log_debug!(
                "[Paths] Shell profile resolved to: {}",
                profile.display().to_string().cyan()
            );
            Some(profile)
        }
        None => {
            log_warn!("[Paths] Could not determine home directory; shell profile updates are disabled.");
            None
        }
    }
}
