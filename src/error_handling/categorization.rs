//! Error categorization.
//!
//! Maps transport errors from `reqwest` onto the check error taxonomy.

use std::error::Error as StdError;

use super::types::CheckError;

/// Categorizes a `reqwest::Error` into a `CheckError`.
///
/// Timeouts reported by the transport become `CheckError::Timeout` with the
/// supplied message; everything else becomes `CheckError::Network` carrying
/// the underlying cause.
pub fn categorize_reqwest_error(error: &reqwest::Error, timeout_message: &str) -> CheckError {
    if error.is_timeout() {
        CheckError::Timeout(timeout_message.to_string())
    } else {
        CheckError::Network(error_chain_message(error))
    }
}

/// Joins an error and its sources into one message.
///
/// `reqwest` keeps the useful part ("Connection refused", "dns error", ...) in
/// the source chain, so the top-level message alone is rarely enough.
pub fn error_chain_message(error: &(dyn StdError + 'static)) -> String {
    let mut message = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        let cause_message = cause.to_string();
        if !message.contains(&cause_message) {
            message.push_str(": ");
            message.push_str(&cause_message);
        }
        source = cause.source();
    }
    message
}
