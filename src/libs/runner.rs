// The subprocess boundary. Every collaborator (brew, python3, uv, code, ruff)
// is reached through `CommandRunner`, so the ensure and validate phases never
// touch `std::process::Command` directly.

use std::ffi::{OsStr, OsString};
// Spawn failures surface as `io::Error` from the runner.
use std::io;
use std::path::{Path, PathBuf};
// The only place in the crate that spawns child processes.
use std::process::Command;

// For coloring command lines in debug output.
use colored::Colorize;

// Mandatory commands turn failures into `SetupError`.
use crate::libs::errors::SetupError;
// Every command line is logged at debug level before it runs.
use crate::log_debug;

/// One collaborator invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandRequest {
    pub program: String,
    pub args: Vec<String>,
    pub cwd: PathBuf,
    /// Explicit PATH handed to the child; `None` inherits the process PATH.
    pub path_env: Option<OsString>,
    /// Inherit stdio instead of capturing it (installers print progress and may prompt).
    pub interactive: bool,
}

impl CommandRequest {
    /// The command as a user would type it, for logs and error messages.
    pub fn command_line(&self) -> String {
        if self.args.is_empty() {
            self.program.clone()
        } else {
            format!("{} {}", self.program, self.args.join(" "))
        }
    }
}

/// What came back from a collaborator.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    pub success: bool,
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

pub trait CommandRunner {
    /// Runs the request to completion. There is no timeout.
    fn run(&self, request: &CommandRequest) -> io::Result<CommandOutput>;

    /// Resolves `program` on `path_env` (or the process PATH when `None`).
    fn locate(&self, program: &str, path_env: Option<&OsStr>, cwd: &Path) -> Option<PathBuf>;
}

/// Runs real processes.
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, request: &CommandRequest) -> io::Result<CommandOutput> {
        let mut cmd = Command::new(&request.program);
        cmd.args(&request.args).current_dir(&request.cwd);
        if let Some(path) = &request.path_env {
            cmd.env("PATH", path);
        }

        if request.interactive {
            let status = cmd.status()?;
            return Ok(CommandOutput {
                success: status.success(),
                code: status.code(),
                ..CommandOutput::default()
            });
        }

        let output = cmd.output()?;
        Ok(CommandOutput {
            success: output.status.success(),
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }

    fn locate(&self, program: &str, path_env: Option<&OsStr>, cwd: &Path) -> Option<PathBuf> {
        match path_env {
            Some(paths) => which::which_in(program, Some(paths), cwd).ok(),
            None => which::which(program).ok(),
        }
    }
}

/// Runs a mandatory command: a spawn failure or non-zero exit becomes an error.
pub fn run_checked(
    runner: &dyn CommandRunner,
    request: &CommandRequest,
) -> Result<CommandOutput, SetupError> {
    let command = request.command_line();
    log_debug!("[Runner] Executing: {}", command.cyan());

    let output = runner.run(request).map_err(|source| SetupError::Spawn {
        command: command.clone(),
        source,
    })?;

    if output.success {
        Ok(output)
    } else {
        if !output.stderr.is_empty() {
            log_debug!("[Runner] Stderr: {}", output.stderr.trim());
        }
        Err(SetupError::CommandFailed {
            command,
            code: output.code.unwrap_or(-1),
            hint: None,
        })
    }
}

/// Runs a read-only probe. Absence is a normal outcome, so any failure is `None`.
pub fn probe(runner: &dyn CommandRunner, request: &CommandRequest) -> Option<CommandOutput> {
    log_debug!("[Runner] Probing: {}", request.command_line().dimmed());
    match runner.run(request) {
        Ok(output) if output.success => Some(output),
        Ok(output) => {
            log_debug!(
                "[Runner] '{}' exited with {:?}",
                request.command_line(),
                output.code
            );
            None
        }
        Err(e) => {
            log_debug!("[Runner] '{}' could not run: {}", request.command_line(), e);
            None
        }
    }
}


#[cfg(test)]
mod tests {
    use super::testing::FakeRunner;
    use super::*;

    fn request(program: &str, args: &[&str]) -> CommandRequest {
        CommandRequest {
            program: program.to_string(),
            args: args.iter().map(|a| a.to_string()).collect(),
            cwd: PathBuf::from("."),
            path_env: None,
            interactive: false,
        }
    }

    #[test]
    fn command_line_joins_program_and_args() {
        assert_eq!(request("uv", &["add", "--dev", "ruff"]).command_line(), "uv add --dev ruff");
        assert_eq!(request("brew", &[]).command_line(), "brew");
    }

    #[test]
    fn run_checked_maps_non_zero_exit_to_command_failed() {
        let runner = FakeRunner::new().fail("brew install uv", 2);
        let err = run_checked(&runner, &request("brew", &["install", "uv"])).unwrap_err();
        match err {
            SetupError::CommandFailed { command, code, .. } => {
                assert_eq!(command, "brew install uv");
                assert_eq!(code, 2);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn run_checked_maps_missing_program_to_spawn() {
        let runner = FakeRunner::new();
        let err = run_checked(&runner, &request("uv", &["sync"])).unwrap_err();
        assert!(matches!(err, SetupError::Spawn { .. }));
    }

    #[test]
    fn probe_swallows_failures() {
        let runner = FakeRunner::new()
            .with_binary("ruff")
            .fail("ruff --version", 1);
        assert!(probe(&runner, &request("ruff", &["--version"])).is_none());
        assert!(probe(&runner, &request("missing", &["--version"])).is_none());
    }

    #[test]
    fn system_runner_captures_stdout() {
        let output = SystemRunner
            .run(&request("sh", &["-c", "echo hello"]))
            .expect("sh should be available");
        assert!(output.success);
        assert_eq!(output.stdout.trim(), "hello");
    }
}
