// Our custom logging macros to give us nicely formatted (and colored!) output.
use crate::log_warn;
// The 'colored' crate helps us make our console output readable.
use colored::Colorize;

/// Detects the current machine's CPU architecture (e.g., "arm64", "x86_64").
/// Homebrew lives under a different prefix on Apple Silicon, so the package-manager
/// step needs this to decide whether the shell profile must be touched.
///
/// # Returns
/// * `Option<String>`: the architecture in canonical form ("arm64" for "aarch64").
pub fn detect_architecture() -> Option<String> {
    // `std::env::consts::ARCH` is the target the binary was compiled for.
    Some(normalize_arch(std::env::consts::ARCH))
}

/// Normalizes architecture names into a consistent, lowercase format.
///
/// # Arguments
/// * `arch`: e.g. "AARCH64", "x86_64", "amd64".
///
/// # Returns
/// * `String`: "arm64" or "x86_64" for known aliases, otherwise the lowercase input.
pub fn normalize_arch(arch: &str) -> String {
    match arch.to_lowercase().as_str() {
        "aarch64" | "arm64" => "arm64".to_string(),
        "amd64" | "x86_64" => "x86_64".to_string(),
        other => {
            log_warn!(
                "[Platform] Unknown ARCH variant '{}', using as-is.",
                other.purple()
            );
            other.to_string()
        }
    }
}

/// True when Homebrew installs under `/opt/homebrew` and needs the shellenv line.
pub fn is_apple_silicon(arch: &str) -> bool {
    normalize_arch(arch) == "arm64"
}
