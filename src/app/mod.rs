//! Main application modules.
//!
//! This module provides the command-line host of the scan controller: command
//! parsing, the batch and interactive event loops, and run statistics.

pub mod commands;
pub mod session;
pub mod statistics;

// Re-export public API
pub use commands::{Command, HELP_TEXT};
pub use session::{run_batch, run_interactive};
pub use statistics::ScanTally;
