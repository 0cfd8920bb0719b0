// Core logic of the bootstrap run.

// `SetupError` and remediation hints.
pub mod errors;
// Well-known file names and shell profile resolution.
pub mod paths;
// The subprocess boundary.
pub mod runner;
// Environment-driven settings.
pub mod settings;
// End-of-run report and exit status.
pub mod summary;
// Ensure phase.
pub mod tool_installer;
// Validation phase.
pub mod validator;
pub mod utilities;
