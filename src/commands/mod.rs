// Register application commands.
// The CLI has no subcommands; these are the two things an invocation can do.

// Ensure, validate and summarize the Python toolchain.
pub mod bootstrap;
// Prints the fixed usage text.
pub mod help;
