//! Error type definitions.
//!
//! This module defines the errors a URL check can fail with, plus the errors
//! raised while setting up shared resources at startup.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),
}

/// Errors that can end a URL check.
///
/// The `Display` output of every variant is the user-facing message: it is
/// what the CLI prints after `Error:` and what the HTTP service puts in the
/// `error` field of the response.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CheckError {
    /// Missing or malformed input URL.
    #[error("{0}")]
    Validation(String),

    /// An outbound call exceeded its time bound.
    #[error("{0}")]
    Timeout(String),

    /// Transport-level failure (DNS, connection refused, TLS, bad payload).
    #[error("{0}")]
    Network(String),

    /// Non-success response from the Safe Browsing API.
    #[error("{}", service_message(.status, .status_text, .body))]
    Service {
        status: u16,
        status_text: String,
        body: String,
    },

    /// Required configuration (the API key) is missing.
    #[error("{0}")]
    Config(String),
}

impl CheckError {
    /// Short label used in log lines.
    pub fn kind(&self) -> &'static str {
        match self {
            CheckError::Validation(_) => "validation",
            CheckError::Timeout(_) => "timeout",
            CheckError::Network(_) => "network",
            CheckError::Service { .. } => "service",
            CheckError::Config(_) => "config",
        }
    }
}

fn service_message(status: &u16, status_text: &str, body: &str) -> String {
    format!("GSB request failed: HTTP {} {} {}", status, status_text, body)
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_error_message_includes_status_and_body() {
        let err = CheckError::Service {
            status: 403,
            status_text: "Forbidden".to_string(),
            body: "{\"error\":\"denied\"}".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "GSB request failed: HTTP 403 Forbidden {\"error\":\"denied\"}"
        );
    }

    #[test]
    fn test_service_error_message_trims_empty_body() {
        let err = CheckError::Service {
            status: 500,
            status_text: "Internal Server Error".to_string(),
            body: String::new(),
        };
        assert_eq!(
            err.to_string(),
            "GSB request failed: HTTP 500 Internal Server Error"
        );
    }

    #[test]
    fn test_message_variants_display_their_message() {
        assert_eq!(
            CheckError::Timeout("Timeout while resolving URL".into()).to_string(),
            "Timeout while resolving URL"
        );
        assert_eq!(
            CheckError::Network("connection refused".into()).to_string(),
            "connection refused"
        );
    }

    #[test]
    fn test_kind_labels() {
        assert_eq!(CheckError::Validation(String::new()).kind(), "validation");
        assert_eq!(CheckError::Timeout(String::new()).kind(), "timeout");
        assert_eq!(CheckError::Network(String::new()).kind(), "network");
        assert_eq!(CheckError::Config(String::new()).kind(), "config");
        assert_eq!(
            CheckError::Service {
                status: 500,
                status_text: String::new(),
                body: String::new()
            }
            .kind(),
            "service"
        );
    }
}
