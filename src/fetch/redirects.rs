//! HTTP redirect chain resolution.
//!
//! Redirects are chased by the transport (reqwest's redirect policy), not
//! here; this module only validates the input, bounds the request in time and
//! reports the URL the transport ended up on.

use std::time::Duration;

use log::debug;
use reqwest::Url;

use crate::error_handling::{categorize_reqwest_error, CheckError};

pub const INVALID_URL_MESSAGE: &str = "invalid URL, must be absolute with http(s) scheme";
pub const RESOLVE_TIMEOUT_MESSAGE: &str = "Timeout while resolving URL";

/// Resolves the final destination of a URL after all redirects.
///
/// Issues one GET request (no retry) and returns the final URL exactly as the
/// transport reports it. The response body is never read.
///
/// # Arguments
///
/// * `client` - HTTP client with redirect following enabled
/// * `input_url` - Absolute `http://` or `https://` URL
/// * `timeout` - Upper bound for the whole request, redirects included
///
/// # Errors
///
/// - `CheckError::Validation` if the input is not an absolute http(s) URL
/// - `CheckError::Timeout` if the request does not complete within `timeout`
/// - `CheckError::Network` for any other transport failure
pub async fn resolve_final_url(
    client: &reqwest::Client,
    input_url: &str,
    timeout: Duration,
) -> Result<String, CheckError> {
    let url = Url::parse(input_url)
        .map_err(|_| CheckError::Validation(INVALID_URL_MESSAGE.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(CheckError::Validation(INVALID_URL_MESSAGE.to_string()));
    }

    // Dropping the send future on expiry aborts the in-flight request
    let response = match tokio::time::timeout(timeout, client.get(url).send()).await {
        Ok(result) => result.map_err(|e| categorize_reqwest_error(&e, RESOLVE_TIMEOUT_MESSAGE))?,
        Err(_) => return Err(CheckError::Timeout(RESOLVE_TIMEOUT_MESSAGE.to_string())),
    };

    let final_url = response.url().to_string();
    debug!(
        "Resolved {} -> {} (status {})",
        input_url,
        final_url,
        response.status()
    );
    Ok(final_url)
}
