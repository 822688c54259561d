//! Google Safe Browsing lookup client.

use std::sync::Arc;
use std::time::Duration;

use log::{debug, info};

use super::types::{ThreatMatchRequest, ThreatMatchResponse};
use crate::config::{ApiKey, CheckerConfig};
use crate::error_handling::{categorize_reqwest_error, CheckError};

pub const GSB_TIMEOUT_MESSAGE: &str = "Timeout while querying Google Safe Browsing";

/// Client for the Safe Browsing v4 `threatMatches:find` lookup API.
///
/// Construction requires an [`ApiKey`], so a missing key is reported by
/// `ApiKey::resolve` before any lookup can be attempted.
#[derive(Debug, Clone)]
pub struct SafeBrowsingClient {
    client: Arc<reqwest::Client>,
    endpoint: String,
    api_key: ApiKey,
    timeout: Duration,
}

impl SafeBrowsingClient {
    pub fn new(client: Arc<reqwest::Client>, config: &CheckerConfig) -> Self {
        Self {
            client,
            endpoint: config.gsb_endpoint.clone(),
            api_key: config.api_key.clone(),
            timeout: config.timeout,
        }
    }

    /// Checks whether `url` matches any threat list entry.
    ///
    /// One POST, no retry. The timeout covers sending the request and reading
    /// the response body.
    ///
    /// # Errors
    ///
    /// - `CheckError::Timeout` if the lookup does not complete in time
    /// - `CheckError::Service` if the API answers with a non-success status
    /// - `CheckError::Network` for transport failures or an undecodable body
    pub async fn is_listed(&self, url: &str) -> Result<bool, CheckError> {
        match tokio::time::timeout(self.timeout, self.lookup(url)).await {
            Ok(result) => result,
            Err(_) => Err(CheckError::Timeout(GSB_TIMEOUT_MESSAGE.to_string())),
        }
    }

    async fn lookup(&self, url: &str) -> Result<bool, CheckError> {
        let response = self
            .client
            .post(&self.endpoint)
            .query(&[("key", self.api_key.as_str())])
            .json(&ThreatMatchRequest::for_url(url))
            .send()
            .await
            .map_err(|e| categorize_reqwest_error(&e, GSB_TIMEOUT_MESSAGE))?;

        let status = response.status();
        if !status.is_success() {
            // Best effort: the status alone is enough to report the failure
            let body = response.text().await.unwrap_or_default();
            return Err(CheckError::Service {
                status: status.as_u16(),
                status_text: status.canonical_reason().unwrap_or_default().to_string(),
                body: body.trim().to_string(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| categorize_reqwest_error(&e, GSB_TIMEOUT_MESSAGE))?;
        let verdict = parse_lookup_body(&body)?;

        if verdict.is_listed() {
            info!(
                "{} is listed by Google Safe Browsing ({})",
                url,
                verdict.threat_types().join(", ")
            );
        } else {
            debug!("{} is not listed by Google Safe Browsing", url);
        }
        Ok(verdict.is_listed())
    }
}

/// Parses a lookup response body; an empty body means "not listed".
fn parse_lookup_body(body: &str) -> Result<ThreatMatchResponse, CheckError> {
    if body.trim().is_empty() {
        return Ok(ThreatMatchResponse::default());
    }
    serde_json::from_str(body).map_err(|e| {
        CheckError::Network(format!(
            "Invalid response from Google Safe Browsing: {}",
            e
        ))
    })
}
