// Helper modules shared by the installers and the validation phase.

// Read and append lines in shell profiles.
pub mod file_operations;
// Version-string parsing for collaborator output.
pub mod misc_utils;
// Host architecture detection.
pub mod platform;
