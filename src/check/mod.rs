//! URL check orchestration.
//!
//! Runs the three steps of a check in order and assembles the result:
//!
//! ```text
//! Validated -> Resolved -> Classified -> Done
//!     \            \            \
//!      +------------+------------+--> Failed
//! ```
//!
//! The first failing step ends the check; later steps never run (in
//! particular, the threat list is never consulted for the original URL when
//! resolution fails).

mod result;

use std::fmt;

use log::{debug, warn};

use crate::error_handling::CheckError;
use crate::fetch::RedirectResolver;
use crate::security::{is_https_to_http_downgrade, ThreatChecker};

pub use result::CheckResult;

/// Step of a check that had not completed when it failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckStage {
    /// Following redirects from the input URL
    Resolve,
    /// Looking up the final URL on the threat list
    ThreatLookup,
}

impl fmt::Display for CheckStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CheckStage::Resolve => f.write_str("resolve"),
            CheckStage::ThreatLookup => f.write_str("threat lookup"),
        }
    }
}

/// A check that stopped early.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckFailure {
    pub stage: CheckStage,
    pub error: CheckError,
}

impl fmt::Display for CheckFailure {
    // Only the error message is user facing
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.error.fmt(f)
    }
}

impl std::error::Error for CheckFailure {}

/// Runs URL checks with a redirect resolver and a threat checker.
///
/// Holds no mutable state; one instance is shared by every request.
#[derive(Debug, Clone)]
pub struct UrlChecker<R, T> {
    resolver: R,
    threats: T,
}

impl<R, T> UrlChecker<R, T>
where
    R: RedirectResolver,
    T: ThreatChecker,
{
    pub fn new(resolver: R, threats: T) -> Self {
        Self { resolver, threats }
    }

    /// Checks `input_url`: resolve, then downgrade detection, then the threat
    /// list lookup on the final URL.
    ///
    /// The two network calls are sequential since the lookup needs the
    /// resolved URL.
    pub async fn check(&self, input_url: &str) -> Result<CheckResult, CheckFailure> {
        let final_url = self
            .resolver
            .resolve(input_url)
            .await
            .map_err(|error| fail(input_url, CheckStage::Resolve, error))?;

        let https_to_http = is_https_to_http_downgrade(input_url, &final_url);

        let gsb_listed = self
            .threats
            .is_listed(&final_url)
            .await
            .map_err(|error| fail(input_url, CheckStage::ThreatLookup, error))?;

        debug!(
            "Checked {}: final_url={}, https_to_http={}, gsb_listed={}",
            input_url, final_url, https_to_http, gsb_listed
        );
        Ok(CheckResult::success(
            input_url,
            final_url,
            https_to_http,
            gsb_listed,
        ))
    }
}

fn fail(input_url: &str, stage: CheckStage, error: CheckError) -> CheckFailure {
    warn!(
        "Check of {} failed during {} ({}): {}",
        input_url,
        stage,
        error.kind(),
        error
    );
    CheckFailure { stage, error }
}


#[cfg(test)]
mod tests {
    use std::sync::atomic::Ordering;

    use super::test_support::{StubResolver, StubThreats};
    use super::*;

    #[tokio::test]
    async fn test_clean_url_without_redirect() {
        let checker = UrlChecker::new(StubResolver::default(), StubThreats::default());
        let result = checker.check("https://example.com").await.unwrap();
        assert_eq!(
            result,
            CheckResult::success("https://example.com", "https://example.com", false, false)
        );
    }

    #[tokio::test]
    async fn test_downgrade_and_listing_use_final_url() {
        let mut resolver = StubResolver::default();
        resolver.redirects.insert(
            "https://short.example/abc".into(),
            "http://phish.example/login".into(),
        );
        let threats = StubThreats {
            listed: vec!["http://phish.example/login".into()],
            ..Default::default()
        };

        let checker = UrlChecker::new(resolver, threats);
        let result = checker.check("https://short.example/abc").await.unwrap();
        assert_eq!(result.final_url.as_deref(), Some("http://phish.example/login"));
        assert!(result.https_to_http);
        assert!(result.gsb_listed);
        assert!(result.error.is_none());
    }

    #[tokio::test]
    async fn test_resolution_failure_skips_threat_lookup() {
        let resolver = StubResolver {
            error: Some(CheckError::Timeout("Timeout while resolving URL".into())),
            ..Default::default()
        };
        let threats = StubThreats::default();
        let lookups = threats.lookups.clone();

        let checker = UrlChecker::new(resolver, threats);
        let failure = checker.check("https://example.com").await.unwrap_err();
        assert_eq!(failure.stage, CheckStage::Resolve);
        assert_eq!(failure.to_string(), "Timeout while resolving URL");
        assert_eq!(lookups.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_threat_lookup_failure_is_reported_at_its_stage() {
        let threats = StubThreats {
            error: Some(CheckError::Service {
                status: 429,
                status_text: "Too Many Requests".into(),
                body: String::new(),
            }),
            ..Default::default()
        };
        let checker = UrlChecker::new(StubResolver::default(), threats);
        let failure = checker.check("https://example.com").await.unwrap_err();
        assert_eq!(failure.stage, CheckStage::ThreatLookup);
        assert_eq!(
            failure.to_string(),
            "GSB request failed: HTTP 429 Too Many Requests"
        );
    }
}
