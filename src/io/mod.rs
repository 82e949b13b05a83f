//! Input/output: configuration defaults, errors, CLI and chart output

/// Command-line parsing and the generation runner
pub mod cli;
/// Layout constants and search budget defaults
pub mod configuration;
/// Error type shared by the whole crate
pub mod error;
/// PNG chart export
pub mod image;
/// Attempt progress bar
pub mod progress;
/// Text chart rendering
pub mod render;
