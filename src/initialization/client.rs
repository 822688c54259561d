//! HTTP client initialization.

use std::sync::Arc;

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::ClientBuilder;

use crate::config::CheckerConfig;
use crate::error_handling::InitializationError;

/// Initializes the shared HTTP client.
///
/// Creates a `reqwest::Client` configured with:
/// - User-Agent header from the checker configuration
/// - `Accept: */*` on every request
/// - reqwest's default redirect policy (redirects are followed by the
///   transport, up to its own hop limit)
/// - Rustls TLS backend (no native TLS)
///
/// No client-wide timeout is set: each call is bounded individually by the
/// caller so that resolution and lookup get separate budgets.
///
/// # Errors
///
/// Returns `InitializationError::HttpClientError` if client creation fails.
pub fn init_client(config: &CheckerConfig) -> Result<Arc<reqwest::Client>, InitializationError> {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static("*/*"));

    let client = ClientBuilder::new()
        .user_agent(config.user_agent.clone())
        .default_headers(headers)
        .build()?;
    Ok(Arc::new(client))
}
