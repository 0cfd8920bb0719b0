// This module is the "shell configuration manager". Its only job here is making sure
// a line (the Homebrew shellenv hook) lives in the user's login profile exactly once.

use std::path::Path;

use colored::Colorize;

use crate::libs::errors::SetupError;
use crate::libs::utilities::file_operations::ensure_line_in_rc_file;
use crate::{log_debug, log_info};

/// Adds `line` to the profile at `rc_path` unless it is already there.
///
/// # Returns
/// * `Ok(true)` if the profile was modified, `Ok(false)` if nothing had to change.
pub fn ensure_line(rc_path: &Path, line: &str) -> Result<bool, SetupError> {
    let written = ensure_line_in_rc_file(rc_path, line).map_err(|source| SetupError::Profile {
        path: rc_path.to_path_buf(),
        source,
    })?;

    if written {
        log_info!(
            "[Shell Config] Added {} to {}",
            line.green(),
            rc_path.display().to_string().cyan()
        );
    } else {
        log_debug!(
            "[Shell Config] {} is already up to date.",
            rc_path.display().to_string().cyan()
        );
    }
    Ok(written)
}
