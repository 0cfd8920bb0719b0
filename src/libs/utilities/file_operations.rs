use crate::log_debug;
use colored::Colorize;
use std::fs::{self, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

/// Reads profile lines while preserving comments, empty lines, and original formatting.
///
/// # Returns
/// * `io::Result<Vec<String>>` - the lines of the file, or an empty vector if it doesn't exist yet
pub fn read_rc_file(rc_path: &Path) -> std::io::Result<Vec<String>> {
    // A missing profile is treated as an empty new file
    if !rc_path.exists() {
        return Ok(vec![]);
    }

    let file = fs::File::open(rc_path)?;
    Ok(BufReader::new(file).lines().map_while(Result::ok).collect())
}

/// Appends `line` to the profile unless an identical (trimmed) line is already there.
///
/// # Returns
/// * `Ok(true)` when the line was written, `Ok(false)` when it was already present
pub fn ensure_line_in_rc_file(rc_path: &Path, line: &str) -> std::io::Result<bool> {
    let existing = read_rc_file(rc_path)?;
    if existing.iter().any(|l| l.trim() == line.trim()) {
        log_debug!(
            "[Shell Config] '{}' already present in {}",
            line.dimmed(),
            rc_path.display()
        );
        return Ok(false);
    }

    if let Some(parent) = rc_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let mut file = OpenOptions::new().create(true).append(true).open(rc_path)?;
    writeln!(file, "\n# Added by setup-pytoolchain")?;
    writeln!(file, "{line}")?;

    log_debug!(
        "[Shell Config] Appended '{}' to {}",
        line.dimmed(),
        rc_path.display().to_string().cyan()
    );
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn appends_once() {
        let dir = TempDir::new().unwrap();
        let profile = dir.path().join(".zprofile");
        fs::write(&profile, "export EDITOR=vim\n").unwrap();

        assert!(ensure_line_in_rc_file(&profile, "eval \"$(brew shellenv)\"").unwrap());
        assert!(!ensure_line_in_rc_file(&profile, "eval \"$(brew shellenv)\"").unwrap());

        let lines = read_rc_file(&profile).unwrap();
        assert_eq!(lines.first().map(String::as_str), Some("export EDITOR=vim"));
        assert_eq!(
            lines.iter().filter(|l| l.contains("brew shellenv")).count(),
            1
        );
    }

    #[test]
    fn creates_missing_profile() {
        let dir = TempDir::new().unwrap();
        let profile = dir.path().join("nested").join(".zprofile");
        assert!(read_rc_file(&profile).unwrap().is_empty());
        assert!(ensure_line_in_rc_file(&profile, "export FOO=1").unwrap());
        assert!(profile.exists());
    }
}
