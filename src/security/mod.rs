//! URL safety checks.
//!
//! - Downgrade detection: did the navigation drop from https to http?
//! - Threat list lookup: is the URL listed by Google Safe Browsing?

mod downgrade;
mod safe_browsing;
mod types;

use std::future::Future;

use crate::error_handling::CheckError;

pub use downgrade::is_https_to_http_downgrade;
pub use safe_browsing::SafeBrowsingClient;

/// Reports whether a URL is on a threat list.
pub trait ThreatChecker: Send + Sync {
    fn is_listed(&self, url: &str) -> impl Future<Output = Result<bool, CheckError>> + Send;
}

impl ThreatChecker for SafeBrowsingClient {
    async fn is_listed(&self, url: &str) -> Result<bool, CheckError> {
        SafeBrowsingClient::is_listed(self, url).await
    }
}
