//! Logging utilities module
//!
//! - `types`: configured log level
//! - `file_logging`: size-rotated log file writer
//! - `sanitization`: credential and PHI redaction

pub mod file_logging;
pub mod sanitization;
pub mod types;

pub use file_logging::RotatingFileWriter;
pub use sanitization::Sanitization;
pub use types::LogLevel;
