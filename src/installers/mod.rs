// This module is the hub for the per-tool installers. Each submodule wraps one
// collaborator's CLI: presence probes, install and upgrade actions, and the
// version parsing for that tool. The ensure and validate phases in `libs`
// only ever talk to these modules.

/// Homebrew itself plus the `brew install`/`upgrade`/`update` wrappers the others use.
pub(crate) mod brew;

/// Login-profile edits (the Homebrew shellenv line on Apple Silicon).
pub(crate) mod shellrc;

/// The Python runtime (`python3`, Homebrew formula `python`).
pub(crate) mod python;

/// pip, driven as `python3 -m pip`.
pub(crate) mod pip;

/// uv: global tool installs, dev dependencies, `uv run`, `uv sync`.
pub(crate) mod uv;

/// VS Code and its extensions.
pub(crate) mod vscode;

/// Ruff, project-scoped or global.
pub(crate) mod ruff;

/// `.venv` creation and re-sync for an existing project.
pub(crate) mod project;
