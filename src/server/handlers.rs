//! Request handlers.

use std::sync::Arc;

use axum::extract::{RawQuery, State};
use axum::Json;
use log::info;

use super::types::ApiError;
use crate::check::{CheckResult, UrlChecker};
use crate::fetch::RedirectResolver;
use crate::security::ThreatChecker;

pub const MISSING_URL_MESSAGE: &str = "Missing required query parameter 'url'";
pub const INVALID_SCHEME_MESSAGE: &str = "Invalid URL. Must start with http:// or https://";

/// `GET /check?url=...`
///
/// Validates the parameter before any network call, then runs the check.
/// The query string is parsed leniently so that a malformed query still gets
/// the JSON error record rather than a framework rejection.
pub async fn check_handler<R, T>(
    State(checker): State<Arc<UrlChecker<R, T>>>,
    RawQuery(query): RawQuery,
) -> Result<Json<CheckResult>, ApiError>
where
    R: RedirectResolver,
    T: ThreatChecker,
{
    let input_url = validate_url_param(url_param(query.as_deref()))?;
    info!("Checking {}", input_url);

    match checker.check(&input_url).await {
        Ok(result) => Ok(Json(result)),
        Err(failure) => Err(ApiError::BadGateway(CheckResult::failure(
            Some(input_url),
            failure.to_string(),
        ))),
    }
}

/// Fallback for every other route.
pub async fn not_found_handler() -> ApiError {
    ApiError::NotFound
}

/// First `url` value of a raw query string, percent-decoded.
fn url_param(query: Option<&str>) -> Option<String> {
    let query = query?;
    url::form_urlencoded::parse(query.as_bytes())
        .find(|(key, _)| key == "url")
        .map(|(_, value)| value.into_owned())
}

/// Pre-flight gate: the parameter must be non-empty after trimming and start
/// with `http://` or `https://` (any case).
fn validate_url_param(raw: Option<String>) -> Result<String, ApiError> {
    let input_url = raw.as_deref().map(str::trim).unwrap_or_default();
    if input_url.is_empty() {
        return Err(ApiError::BadRequest(CheckResult::failure(
            None,
            MISSING_URL_MESSAGE,
        )));
    }

    let lower = input_url.to_ascii_lowercase();
    if !lower.starts_with("http://") && !lower.starts_with("https://") {
        return Err(ApiError::BadRequest(CheckResult::failure(
            Some(input_url.to_string()),
            INVALID_SCHEME_MESSAGE,
        )));
    }

    Ok(input_url.to_string())
}
