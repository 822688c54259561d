//! Error handling.
//!
//! This module provides:
//! - The check error taxonomy (`CheckError`)
//! - Initialization errors for startup resources
//! - Categorization of transport errors into the taxonomy
//!
//! Check errors fall into five categories:
//! - **Validation**: the input URL is missing or malformed
//! - **Timeout**: an outbound call exceeded its bound
//! - **Network**: the transport failed below the application
//! - **Service**: the Safe Browsing API answered with a non-success status
//! - **Config**: the API key is not configured

mod categorization;
mod types;

// Re-export public API
pub use categorization::categorize_reqwest_error;
pub use types::{CheckError, InitializationError};
