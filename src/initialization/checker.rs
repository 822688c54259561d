//! URL checker initialization.

use crate::check::UrlChecker;
use crate::config::CheckerConfig;
use crate::error_handling::InitializationError;
use crate::fetch::HttpRedirectResolver;
use crate::security::SafeBrowsingClient;

use super::client::init_client;

/// Checker backed by real network calls.
pub type HttpUrlChecker = UrlChecker<HttpRedirectResolver, SafeBrowsingClient>;

/// Builds a checker whose resolver and Safe Browsing client share one HTTP
/// client and the configured per-call timeout.
///
/// # Errors
///
/// Returns `InitializationError::HttpClientError` if the HTTP client cannot
/// be built.
pub fn init_checker(config: &CheckerConfig) -> Result<HttpUrlChecker, InitializationError> {
    let client = init_client(config)?;
    let resolver = HttpRedirectResolver::new(client.clone(), config.timeout);
    let threats = SafeBrowsingClient::new(client, config);
    Ok(UrlChecker::new(resolver, threats))
}
