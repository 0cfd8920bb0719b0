// State for a single invocation: the mode, where the project lives, the PATH
// handed to collaborators, and the validation tally. Nothing here outlives the process.

use std::env;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::cli::type_enums::{Criticality, Mode};
use crate::libs::errors::SetupError;
use crate::libs::paths::{self, MANIFEST_FILE, VENV_DIR, VERSION_PIN_FILE};
use crate::libs::runner::{CommandRequest, CommandRunner};
use crate::libs::settings::Settings;
use crate::libs::utilities::platform::detect_architecture;

/// Number of critical validation checks (python3, pip, uv).
pub const CRITICAL_TOTAL: usize = 3;
/// Number of optional validation checks (VS Code, extensions, Ruff, project layout).
pub const OPTIONAL_TOTAL: usize = 4;

/// Pass counters, accumulated in validation order. They only ever go up.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    pub critical_passed: usize,
    pub optional_passed: usize,
}

impl Tally {
    pub fn record(&mut self, criticality: Criticality, passed: bool) {
        if !passed {
            return;
        }
        match criticality {
            Criticality::Critical => self.critical_passed += 1,
            Criticality::Optional => self.optional_passed += 1,
        }
    }

    pub fn all_critical_passed(&self) -> bool {
        self.critical_passed == CRITICAL_TOTAL
    }

    pub fn all_optional_passed(&self) -> bool {
        self.optional_passed == OPTIONAL_TOTAL
    }
}

#[derive(Debug, Clone)]
pub struct RunContext {
    pub mode: Mode,
    pub project_root: PathBuf,
    pub profile_path: Option<PathBuf>,
    /// Normalized CPU architecture ("arm64", "x86_64", ...).
    pub arch: String,
    /// PATH passed to every collaborator. `None` means inherit the process PATH.
    pub path_env: Option<OsString>,
    pub tally: Tally,
}

impl RunContext {
    pub fn new(mode: Mode, project_root: impl Into<PathBuf>, arch: impl Into<String>) -> Self {
        RunContext {
            mode,
            project_root: project_root.into(),
            profile_path: None,
            arch: arch.into(),
            path_env: None,
            tally: Tally::default(),
        }
    }

    /// Builds the context for a real run from the working directory, host and settings.
    pub fn from_environment(mode: Mode, settings: &Settings) -> Result<Self, SetupError> {
        let project_root = env::current_dir().map_err(SetupError::WorkingDirectory)?;
        let arch = detect_architecture().unwrap_or_else(|| env::consts::ARCH.to_string());

        let mut ctx = RunContext::new(mode, project_root, arch);
        if let Some(profile) = paths::resolve_profile_path(settings.profile_override.as_deref()) {
            ctx = ctx.with_profile(profile);
        }
        ctx.path_env = env::var_os("PATH");
        Ok(ctx)
    }

    pub fn with_profile(mut self, profile: impl Into<PathBuf>) -> Self {
        self.profile_path = Some(profile.into());
        self
    }

    pub fn manifest_path(&self) -> PathBuf {
        self.project_root.join(MANIFEST_FILE)
    }

    pub fn version_pin_path(&self) -> PathBuf {
        self.project_root.join(VERSION_PIN_FILE)
    }

    pub fn venv_path(&self) -> PathBuf {
        self.project_root.join(VENV_DIR)
    }

    /// Re-reads the filesystem on every call; a step that creates the manifest
    /// changes the answer for the steps after it.
    pub fn project_detected(&self) -> bool {
        self.manifest_path().is_file()
    }

    pub fn venv_present(&self) -> bool {
        self.venv_path().is_dir()
    }

    /// Puts `dirs` in front of the carried PATH so later lookups and children see them.
    pub fn prepend_path(&mut self, dirs: &[&Path]) {
        let mut entries: Vec<PathBuf> = dirs.iter().map(|d| d.to_path_buf()).collect();
        if let Some(current) = &self.path_env {
            entries.extend(
                env::split_paths(current).filter(|existing| !dirs.iter().any(|d| d == existing)),
            );
        }
        // join_paths only fails on entries containing the separator; keep the old PATH then.
        if let Ok(joined) = env::join_paths(entries) {
            self.path_env = Some(joined);
        }
    }

    /// A captured request, for probes.
    pub fn command(&self, program: &str, args: &[&str]) -> CommandRequest {
        CommandRequest {
            program: program.to_string(),
            args: args.iter().map(|a| a.to_string()).collect(),
            cwd: self.project_root.clone(),
            path_env: self.path_env.clone(),
            interactive: false,
        }
    }

    /// An interactive request, for installs and upgrades.
    pub fn interactive(&self, program: &str, args: &[&str]) -> CommandRequest {
        CommandRequest {
            interactive: true,
            ..self.command(program, args)
        }
    }

    /// PATH lookup through the runner, honoring the carried PATH.
    pub fn locate(&self, runner: &dyn CommandRunner, program: &str) -> Option<PathBuf> {
        runner.locate(program, self.path_env.as_deref(), &self.project_root)
    }

    pub fn has_binary(&self, runner: &dyn CommandRunner, program: &str) -> bool {
        self.locate(runner, program).is_some()
    }
}
