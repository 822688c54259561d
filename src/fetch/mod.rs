//! Redirect resolution.
//!
//! Finds where a URL actually lands: a single GET with transport-level
//! redirect following, bounded by a timeout.

mod redirects;

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use crate::error_handling::CheckError;

pub use redirects::resolve_final_url;

/// Resolves an input URL to its final landing URL.
///
/// Implemented by [`HttpRedirectResolver`]; the checker is generic over this
/// trait so the HTTP handler can be exercised without network access.
pub trait RedirectResolver: Send + Sync {
    fn resolve(&self, input_url: &str) -> impl Future<Output = Result<String, CheckError>> + Send;
}

/// Redirect resolver backed by a shared `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct HttpRedirectResolver {
    client: Arc<reqwest::Client>,
    timeout: Duration,
}

impl HttpRedirectResolver {
    /// `client` must follow redirects (see `initialization::init_client`).
    pub fn new(client: Arc<reqwest::Client>, timeout: Duration) -> Self {
        Self { client, timeout }
    }
}

impl RedirectResolver for HttpRedirectResolver {
    async fn resolve(&self, input_url: &str) -> Result<String, CheckError> {
        resolve_final_url(&self.client, input_url, self.timeout).await
    }
}
