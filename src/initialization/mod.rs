//! Application initialization and resource setup.
//!
//! This module provides functions to initialize the shared resources:
//! - Logger (plain or JSON output)
//! - HTTP client used for redirect resolution and Safe Browsing lookups
//! - The URL checker wired to both
//!
//! All initialization functions return proper error types for error handling.

mod checker;
mod client;
mod logger;

// Re-export public API
pub use checker::{init_checker, HttpUrlChecker};
pub use client::init_client;
pub use logger::init_logger_with;
