//! Error types.
//!
//! This module provides:
//! - Scan errors (the two failure kinds of a prediction request)
//! - View errors (tab switching against a page that lacks a section)
//! - Initialization errors (logger, HTTP client, service URL)
//!
//! Both scan error kinds are reported to the user with the same alert; the
//! distinction only matters for logging.

mod types;

// Re-export public API
pub use types::{InitializationError, ScanError, ViewError};
