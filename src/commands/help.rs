//! Fixed usage text for `setup-pytoolchain --help` / `-h`.
//!
//! Printing help never touches the toolchain: no probes, no installs.

use colored::Colorize;
use std::fmt::{self, Write};

use crate::installers::vscode::EXTENSIONS;
use crate::libs::settings::{DEBUG_ENV, PROFILE_ENV};

/// Prints the usage and feature summary to stdout.
pub fn run() {
    let mut output = String::new();
    if write_usage(&mut output).is_ok() {
        print!("{output}");
    }
}

/// Builds the help text. Kept separate from printing so it can be checked in tests.
pub fn write_usage(out: &mut impl Write) -> fmt::Result {
    writeln!(
        out,
        "{} - {}",
        "setup-pytoolchain".bold().bright_green(),
        "Python development environment bootstrap for macOS"
    )?;
    writeln!(out)?;

    writeln!(out, "{}", "USAGE:".bold().yellow())?;
    writeln!(out, "  setup-pytoolchain              Install anything missing")?;
    writeln!(
        out,
        "  setup-pytoolchain --upgrade    Install anything missing and upgrade the rest"
    )?;
    writeln!(out, "  setup-pytoolchain -h, --help   Show this message")?;
    writeln!(out)?;

    writeln!(out, "{}", "WHAT IT SETS UP:".bold().yellow())?;
    let tools = [
        ("Homebrew", "package manager (shell profile wired up on Apple Silicon)"),
        ("Python 3", "Homebrew formula 'python'"),
        ("pip", "bootstrapped with ensurepip when missing"),
        ("uv", "fast package and project manager"),
        ("VS Code", "Homebrew cask 'visual-studio-code'"),
        ("Ruff", "dev dependency inside a project, global tool otherwise"),
        (".venv", "created with 'uv sync' when pyproject.toml exists"),
    ];
    for (name, what) in tools {
        writeln!(out, "  • {:<10} {}", name.cyan(), what)?;
    }
    writeln!(out, "  • {:<10} {}", "Extensions".cyan(), EXTENSIONS.join(", "))?;
    writeln!(out)?;

    writeln!(out, "{}", "VALIDATION:".bold().yellow())?;
    writeln!(out, "  Critical: python3, pip, uv")?;
    writeln!(
        out,
        "  Optional: VS Code, extensions, Ruff, project layout (pyproject.toml, .python-version, .venv)"
    )?;
    writeln!(out)?;

    writeln!(out, "{}", "ENVIRONMENT:".bold().yellow())?;
    writeln!(out, "  {:<26} Enable debug output (1/true)", DEBUG_ENV)?;
    writeln!(
        out,
        "  {:<26} Shell profile for the Homebrew shellenv line (default ~/.zprofile)",
        PROFILE_ENV
    )?;
    writeln!(out, "  {:<26} Disable colored output", "NO_COLOR")?;
    writeln!(out)?;

    writeln!(out, "{}", "EXIT STATUS:".bold().yellow())?;
    writeln!(out, "  0  help shown, or every critical tool validated")?;
    writeln!(out, "  1  unknown option, failed install, or a critical tool missing")?;
    Ok(())
}
