// Runtime settings read from the environment.
// The command line only accepts `--upgrade` and `--help`, so everything else
// that tunes a run comes from here.

use std::env;

/// Turns on `log_debug!` output when set to `1` or `true`.
pub const DEBUG_ENV: &str = "SETUP_PYTOOLCHAIN_DEBUG";
/// Overrides the shell profile that receives the Homebrew shellenv line.
pub const PROFILE_ENV: &str = "SETUP_PYTOOLCHAIN_PROFILE";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    pub debug: bool,
    pub profile_override: Option<String>,
}

impl Settings {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds settings from an arbitrary key lookup so tests don't mutate the process environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let debug = lookup(DEBUG_ENV)
            .map(|v| matches!(v.trim().to_lowercase().as_str(), "1" | "true" | "yes"))
            .unwrap_or(false);
        let profile_override = lookup(PROFILE_ENV).filter(|v| !v.trim().is_empty());

        Settings {
            debug,
            profile_override,
        }
    }
}
