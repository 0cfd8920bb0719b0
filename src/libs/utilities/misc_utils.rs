// Parsing helpers for collaborator output. Each collaborator prints its version
// differently; the per-tool functions here are the only places that know the format.

/// Extracts just the version number part from an input string.
/// Takes everything from the first digit up to the next whitespace.
pub fn extract_version_number(input: &str) -> Option<String> {
    let pos = input.find(|c: char| c.is_ascii_digit())?;
    let version = input[pos..]
        .split_whitespace()
        .next()
        .unwrap_or_default()
        .trim_end_matches([',', ';', ')']);
    (!version.is_empty()).then(|| version.to_string())
}

/// First non-empty line of a command's output.
pub fn first_line(output: &str) -> Option<String> {
    output
        .lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .map(str::to_string)
}

/// `Python 3.12.4` -> `3.12.4`. Old interpreters print to stderr, so both streams are accepted.
pub fn parse_python_version(stdout: &str, stderr: &str) -> Option<String> {
    [stdout, stderr]
        .into_iter()
        .filter_map(first_line)
        .find(|line| line.starts_with("Python"))
        .and_then(|line| extract_version_number(&line))
}

/// `pip 24.0 from /usr/lib/python3.12/site-packages/pip (python 3.12)` -> `24.0`.
pub fn parse_pip_version(stdout: &str) -> Option<String> {
    let line = first_line(stdout)?;
    let rest = line.strip_prefix("pip ")?;
    extract_version_number(rest)
}

/// `uv 0.4.18 (Homebrew 2024-10-01)` -> `0.4.18`.
pub fn parse_uv_version(stdout: &str) -> Option<String> {
    let line = first_line(stdout)?;
    let rest = line.strip_prefix("uv ")?;
    extract_version_number(rest)
}

/// `ruff 0.6.9` -> `0.6.9`.
pub fn parse_ruff_version(stdout: &str) -> Option<String> {
    let line = first_line(stdout)?;
    let rest = line.strip_prefix("ruff ")?;
    extract_version_number(rest)
}

/// `code --version` prints version, commit and arch on separate lines; the first one is the version.
pub fn parse_code_version(stdout: &str) -> Option<String> {
    first_line(stdout)
}

/// Exact substring match against `code --list-extensions` output.
pub fn extension_listed(listing: &str, extension_id: &str) -> bool {
    listing.contains(extension_id)
}
