//! Logging utilities
//!
//! Subscriber setup, the rotating log file and log sanitization.

pub mod init;
pub mod utils;

pub use init::init_logging;
pub use utils::{LogLevel, RotatingFileWriter, Sanitization};
