// Command-line surface: the clap definition and the small enums shared with the rest of the crate.

// The `Cli` struct and argument parsing.
pub mod cmd_enums;
// `Mode` and `Criticality`.
pub mod type_enums;
