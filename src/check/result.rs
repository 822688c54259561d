//! Check result record.

use serde::Serialize;

/// Outcome of one URL check, as printed by the CLI and returned by `/check`.
///
/// Failure records always carry `final_url: null` and both flags `false`:
/// a failed check means "unknown", never "confirmed safe".
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckResult {
    /// `None` only when the caller supplied no URL at all
    pub input_url: Option<String>,
    pub final_url: Option<String>,
    pub https_to_http: bool,
    pub gsb_listed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl CheckResult {
    pub fn success(
        input_url: impl Into<String>,
        final_url: impl Into<String>,
        https_to_http: bool,
        gsb_listed: bool,
    ) -> Self {
        Self {
            input_url: Some(input_url.into()),
            final_url: Some(final_url.into()),
            https_to_http,
            gsb_listed,
            error: None,
        }
    }

    pub fn failure(input_url: Option<String>, error: impl Into<String>) -> Self {
        Self {
            input_url,
            final_url: None,
            https_to_http: false,
            gsb_listed: false,
            error: Some(error.into()),
        }
    }
}
