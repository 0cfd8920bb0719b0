// End-of-run report and the exit-status decision. Only the critical bucket
// decides the exit status; optional failures add a warning banner at most.

use colored::Colorize;

// Pass counters and the fixed bucket sizes.
use crate::schemas::run_context::{CRITICAL_TOTAL, OPTIONAL_TOTAL, Tally};

/// Overall result of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// Every check passed.
    Ready,
    /// Every critical check passed, at least one optional check did not.
    ReadyWithWarnings,
    /// At least one critical check failed.
    Incomplete,
}

impl Verdict {
    pub fn exit_code(self) -> i32 {
        match self {
            Verdict::Ready | Verdict::ReadyWithWarnings => 0,
            Verdict::Incomplete => 1,
        }
    }
}

pub fn verdict(tally: &Tally) -> Verdict {
    if !tally.all_critical_passed() {
        Verdict::Incomplete
    } else if !tally.all_optional_passed() {
        Verdict::ReadyWithWarnings
    } else {
        Verdict::Ready
    }
}

/// Commands printed after a successful run.
pub const NEXT_STEPS: [(&str, &str); 5] = [
    ("uv init", "start a new project (creates pyproject.toml)"),
    ("uv python pin 3.12", "pin the interpreter (.python-version)"),
    ("uv add <package>", "add a dependency"),
    ("uv run ruff check .", "lint the project"),
    ("code .", "open the project in VS Code"),
];

/// Prints the counts, banners and (on success) the next-steps block.
///
/// ```text
/// ===========================
///   Toolchain Summary
/// ===========================
///   Critical: 3/3
///   Optional: 2/4
/// ===========================
/// ```
pub fn print_summary(tally: &Tally) -> Verdict {
    let rule = "=".repeat(27);
    let result = verdict(tally);

    println!("\n{}", rule.bright_blue());
    println!("  {}", "Toolchain Summary".bright_yellow().bold());
    println!("{}", rule.bright_blue());
    println!(
        "  Critical: {}",
        colored_count(tally.critical_passed, CRITICAL_TOTAL)
    );
    println!(
        "  Optional: {}",
        colored_count(tally.optional_passed, OPTIONAL_TOTAL)
    );
    println!("{}\n", rule.bright_blue());

    match result {
        Verdict::Ready | Verdict::ReadyWithWarnings => {
            println!("{}", "✓ Python toolchain is ready.".green().bold());
            if result == Verdict::ReadyWithWarnings {
                println!(
                    "{}",
                    "⚠ Some optional components are missing; see the [FAIL] lines above."
                        .yellow()
                );
            }
            println!("\n{}", "Next steps:".bold());
            for (command, what) in NEXT_STEPS {
                println!("  {:<22} {}", command.cyan(), what.dimmed());
            }
        }
        Verdict::Incomplete => {
            println!(
                "{}",
                "✗ Setup incomplete: critical tools are missing. Fix the [FAIL] items above and re-run."
                    .red()
                    .bold()
            );
        }
    }
    println!();
    result
}

fn colored_count(passed: usize, total: usize) -> colored::ColoredString {
    let text = format!("{passed}/{total}");
    if passed == total {
        text.green()
    } else {
        text.yellow()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tally(critical_passed: usize, optional_passed: usize) -> Tally {
        Tally {
            critical_passed,
            optional_passed,
        }
    }

    #[test]
    fn all_passing_is_ready() {
        assert_eq!(verdict(&tally(3, 4)), Verdict::Ready);
        assert_eq!(Verdict::Ready.exit_code(), 0);
    }

    #[test]
    fn optional_failures_warn_but_exit_zero() {
        let result = print_summary(&tally(3, 2));
        assert_eq!(result, Verdict::ReadyWithWarnings);
        assert_eq!(result.exit_code(), 0);
    }

    #[test]
    fn any_critical_failure_exits_one() {
        for critical in 0..CRITICAL_TOTAL {
            for optional in 0..=OPTIONAL_TOTAL {
                let result = verdict(&tally(critical, optional));
                assert_eq!(result, Verdict::Incomplete);
                assert_eq!(result.exit_code(), 1);
            }
        }
    }
}
