//! Input/output adapters, configuration and error handling

/// Command-line parsing and batch processing
pub mod cli;
/// Analysis constants and defaults
pub mod configuration;
/// Error types and result alias
pub mod error;
/// Image decoding and cell export
pub mod image;
/// Batch progress display
pub mod progress;
/// Per-cell statistics rows
pub mod report;
