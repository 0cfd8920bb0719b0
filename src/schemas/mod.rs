// Per-run state: mode, project root, PATH and the validation tally.
pub mod run_context;
