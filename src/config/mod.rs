//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (timeouts, defaults, Safe Browsing parameters)
//! - Logging option types used by the CLI
//! - Resolved configuration for the checker and the HTTP service

mod constants;
mod types;

// Re-export all constants
pub use constants::*;
pub use types::{ApiKey, CheckerConfig, LogFormat, LogLevel, ServerConfig};
