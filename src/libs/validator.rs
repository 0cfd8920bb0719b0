// This module runs the validation phase: seven read-only checks, each printing
// its own OK/FAIL lines and returning a boolean. Results are tallied into the
// critical and optional buckets on the run context. Nothing here installs anything.

use colored::Colorize;

// Which summary bucket each check counts toward.
use crate::cli::type_enums::Criticality;
// Version lookups live with the installers; validation only reads them.
use crate::installers::{pip, python, ruff, uv, vscode};
// The three files that make up a complete project layout.
use crate::libs::paths::{MANIFEST_FILE, VENV_DIR, VERSION_PIN_FILE};
use crate::libs::runner::CommandRunner;
use crate::schemas::run_context::RunContext;
// `log_ok!`/`log_fail!` print the per-check result lines.
use crate::{log_debug, log_fail, log_info, log_ok};

pub type Check = fn(&RunContext, &dyn CommandRunner) -> bool;

/// One validation item and the bucket its result counts toward.
pub struct CheckSpec {
    pub name: &'static str,
    pub check: Check,
    pub criticality: Criticality,
}

/// The validation checks, in reporting order. The critical set never changes with mode.
pub fn check_specs() -> [CheckSpec; 7] {
    [
        CheckSpec {
            name: "Python",
            check: check_python,
            criticality: Criticality::Critical,
        },
        CheckSpec {
            name: "pip",
            check: check_pip,
            criticality: Criticality::Critical,
        },
        CheckSpec {
            name: "uv",
            check: check_uv,
            criticality: Criticality::Critical,
        },
        CheckSpec {
            name: "VS Code",
            check: check_vscode,
            criticality: Criticality::Optional,
        },
        CheckSpec {
            name: "VS Code extensions",
            check: check_extensions,
            criticality: Criticality::Optional,
        },
        CheckSpec {
            name: "Ruff",
            check: check_ruff,
            criticality: Criticality::Optional,
        },
        CheckSpec {
            name: "Project layout",
            check: check_project_layout,
            criticality: Criticality::Optional,
        },
    ]
}

pub fn check_python(ctx: &RunContext, runner: &dyn CommandRunner) -> bool {
    match python::version(ctx, runner) {
        Some(version) => {
            log_ok!("Python {}", version.cyan());
            true
        }
        None => {
            log_fail!("Python 3 not found");
            log_info!("  Try: {}", "brew install python".cyan());
            false
        }
    }
}

pub fn check_pip(ctx: &RunContext, runner: &dyn CommandRunner) -> bool {
    match pip::version(ctx, runner) {
        Some(version) => {
            log_ok!("pip {}", version.cyan());
            true
        }
        None => {
            log_fail!("pip not available for python3");
            log_info!("  Try: {}", "python3 -m ensurepip --upgrade".cyan());
            false
        }
    }
}

pub fn check_uv(ctx: &RunContext, runner: &dyn CommandRunner) -> bool {
    match uv::version(ctx, runner) {
        Some(version) => {
            log_ok!("uv {}", version.cyan());
            true
        }
        None => {
            log_fail!("uv not found");
            log_info!("  Try: {}", "brew install uv".cyan());
            false
        }
    }
}

pub fn check_vscode(ctx: &RunContext, runner: &dyn CommandRunner) -> bool {
    if !vscode::is_present(ctx, runner) {
        log_fail!("VS Code CLI ('code') not found");
        log_info!("  Try: {}", "brew install --cask visual-studio-code".cyan());
        return false;
    }
    match vscode::version(ctx, runner) {
        Some(version) => log_ok!("VS Code {}", version.cyan()),
        None => log_ok!("VS Code (version unknown)"),
    }
    true
}

/// Both extensions must be listed. Each one is reported on its own line.
pub fn check_extensions(ctx: &RunContext, runner: &dyn CommandRunner) -> bool {
    let Some(status) = vscode::extension_status(ctx, runner) else {
        log_fail!("VS Code extensions: cannot check without the 'code' CLI");
        return false;
    };

    let mut all_present = true;
    for (extension_id, present) in status {
        if present {
            log_ok!("Extension {}", extension_id);
        } else {
            all_present = false;
            log_fail!("Extension {} missing", extension_id);
            log_info!(
                "  Try: {}",
                format!("code --install-extension {extension_id}").cyan()
            );
        }
    }
    all_present
}

pub fn check_ruff(ctx: &RunContext, runner: &dyn CommandRunner) -> bool {
    match ruff::resolve_version(ctx, runner) {
        Some(found) => {
            log_ok!("Ruff {} ({})", found.version.cyan(), found.scope);
            true
        }
        None => {
            log_fail!("Ruff not found");
            let hint = if ctx.project_detected() {
                "uv add --dev ruff"
            } else {
                "uv tool install ruff"
            };
            log_info!("  Try: {}", hint.cyan());
            false
        }
    }
}

/// Manifest, version pin and `.venv` must all exist. Each is reported individually.
pub fn check_project_layout(ctx: &RunContext, _runner: &dyn CommandRunner) -> bool {
    let items = [
        (MANIFEST_FILE, ctx.manifest_path().is_file(), "uv init"),
        (VERSION_PIN_FILE, ctx.version_pin_path().is_file(), "uv python pin 3.12"),
        (VENV_DIR, ctx.venv_path().is_dir(), "uv sync"),
    ];

    let mut complete = true;
    for (name, present, hint) in items {
        if present {
            log_ok!("{}", name);
        } else {
            complete = false;
            log_fail!("{} missing", name);
            log_info!("  Try: {}", hint.cyan());
        }
    }
    complete
}

/// Runs every check in order, recording each result in `ctx.tally`.
pub fn validate_toolchain(ctx: &mut RunContext, runner: &dyn CommandRunner) {
    println!();
    log_info!("[Validate] {}", "Verifying toolchain...".bold());

    for spec in check_specs().iter() {
        let passed = (spec.check)(ctx, runner);
        log_debug!(
            "[Validate] {} ({}): {}",
            spec.name,
            spec.criticality,
            if passed { "pass" } else { "fail" }
        );
        ctx.tally.record(spec.criticality, passed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::type_enums::Mode;
    use crate::libs::runner::testing::FakeRunner;
    use crate::schemas::run_context::{CRITICAL_TOTAL, OPTIONAL_TOTAL};
    use std::fs;
    use tempfile::TempDir;

    fn full_layout(dir: &TempDir) {
        fs::write(dir.path().join(MANIFEST_FILE), "[project]\n").unwrap();
        fs::write(dir.path().join(VERSION_PIN_FILE), "3.12\n").unwrap();
        fs::create_dir(dir.path().join(VENV_DIR)).unwrap();
    }

    fn healthy_runner() -> FakeRunner {
        FakeRunner::new()
            .with_binary("python3")
            .with_binary("uv")
            .with_binary("code")
            .respond("python3 --version", "Python 3.12.4\n")
            .respond("python3 -m pip --version", "pip 24.0 from /x (python 3.12)\n")
            .respond("uv --version", "uv 0.4.18 (Homebrew 2024-10-01)\n")
            .respond("code --version", "1.94.2\nabc123\narm64\n")
            .respond(
                "code --list-extensions",
                "ms-python.python\ncharliermarsh.ruff\n",
            )
            .respond("uv run --no-sync ruff --version", "ruff 0.6.9\n")
    }

    #[test]
    fn bucket_sizes_are_fixed() {
        let specs = check_specs();
        let critical = specs
            .iter()
            .filter(|s| s.criticality == Criticality::Critical)
            .count();
        let optional = specs
            .iter()
            .filter(|s| s.criticality == Criticality::Optional)
            .count();
        assert_eq!(critical, CRITICAL_TOTAL);
        assert_eq!(optional, OPTIONAL_TOTAL);

        let names: Vec<&str> = specs
            .iter()
            .filter(|s| s.criticality == Criticality::Critical)
            .map(|s| s.name)
            .collect();
        assert_eq!(names, vec!["Python", "pip", "uv"]);
    }

    #[test]
    fn healthy_environment_passes_everything() {
        let dir = TempDir::new().unwrap();
        full_layout(&dir);
        let mut ctx = RunContext::new(Mode::Install, dir.path(), "arm64");

        validate_toolchain(&mut ctx, &healthy_runner());

        assert!(ctx.tally.all_critical_passed());
        assert!(ctx.tally.all_optional_passed());
    }

    #[test]
    fn validation_never_installs() {
        let dir = TempDir::new().unwrap();
        let mut ctx = RunContext::new(Mode::Upgrade, dir.path(), "arm64");
        let runner = FakeRunner::new().with_binary("brew");

        validate_toolchain(&mut ctx, &runner);

        assert_eq!(ctx.tally.critical_passed, 0);
        assert!(
            !runner
                .command_lines()
                .iter()
                .any(|l| l.contains("install") || l.contains("upgrade") || l.contains("sync")),
            "{:?}",
            runner.command_lines()
        );
    }

    #[test]
    fn missing_editor_cli_fails_extensions_without_aborting() {
        let dir = TempDir::new().unwrap();
        full_layout(&dir);
        let ctx = RunContext::new(Mode::Install, dir.path(), "arm64");
        let runner = FakeRunner::new()
            .with_binary("uv")
            .respond("uv run --no-sync ruff --version", "ruff 0.6.9\n");

        assert!(!check_extensions(&ctx, &runner));
        // Later checks still run and can pass.
        assert!(check_ruff(&ctx, &runner));
        assert!(check_project_layout(&ctx, &runner));
    }

    #[test]
    fn one_missing_extension_fails_the_check() {
        let ctx = RunContext::new(Mode::Install, "/tmp", "arm64");
        let runner = FakeRunner::new()
            .with_binary("code")
            .respond("code --list-extensions", "ms-python.python\n");
        assert!(!check_extensions(&ctx, &runner));
    }

    #[test]
    fn ruff_check_prefers_project_scope() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(MANIFEST_FILE), "[project]\n").unwrap();
        let ctx = RunContext::new(Mode::Install, dir.path(), "arm64");
        let runner = FakeRunner::new()
            .with_binary("uv")
            .with_binary("ruff")
            .respond("uv run --no-sync ruff --version", "ruff 0.6.9\n")
            .respond("ruff --version", "ruff 0.1.0\n");

        assert!(check_ruff(&ctx, &runner));
        assert!(runner.ran("uv run --no-sync ruff --version"));
        assert!(!runner.ran("ruff --version"));
    }

    #[test]
    fn project_layout_needs_all_three() {
        let dir = TempDir::new().unwrap();
        full_layout(&dir);
        let ctx = RunContext::new(Mode::Install, dir.path(), "arm64");
        let runner = FakeRunner::new();
        assert!(check_project_layout(&ctx, &runner));

        fs::remove_file(dir.path().join(VERSION_PIN_FILE)).unwrap();
        assert!(!check_project_layout(&ctx, &runner));
        // The other two are still there to be reported as present.
        assert!(ctx.manifest_path().is_file());
        assert!(ctx.venv_path().is_dir());
    }

    #[test]
    fn optional_failures_do_not_touch_critical_bucket() {
        let dir = TempDir::new().unwrap();
        let mut ctx = RunContext::new(Mode::Install, dir.path(), "x86_64");
        let runner = FakeRunner::new()
            .with_binary("python3")
            .with_binary("uv")
            .respond("python3 --version", "Python 3.11.9\n")
            .respond("python3 -m pip --version", "pip 23.2 from /x (python 3.11)\n")
            .respond("uv --version", "uv 0.4.18\n");

        validate_toolchain(&mut ctx, &runner);

        assert_eq!(ctx.tally.critical_passed, 3);
        assert_eq!(ctx.tally.optional_passed, 0);
    }
}
