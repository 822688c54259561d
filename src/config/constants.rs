//! Configuration constants.
//!
//! This module defines the constants used throughout the application, including
//! timeouts, the outbound identity, and the Safe Browsing request parameters.

use std::time::Duration;

// Timeouts (used as defaults)
/// Per-call timeout used by the HTTP service for both outbound requests
pub const SERVER_TIMEOUT: Duration = Duration::from_secs(10);
/// Per-call timeout used by the one-shot CLI check
pub const CLI_TIMEOUT: Duration = Duration::from_secs(8);

/// Port the HTTP service listens on when `PORT` is not set
pub const DEFAULT_PORT: u16 = 3000;

/// URL checked by the CLI when no argument is given
pub const DEFAULT_CHECK_URL: &str = "https://example.com";

/// User-Agent sent when resolving redirects.
///
/// Some servers refuse or misbehave on requests without an explicit agent.
pub const DEFAULT_USER_AGENT: &str = "url-checker/1.0 (+https://example.local)";

// Google Safe Browsing v4
/// Lookup API endpoint (the API key is appended as the `key` query parameter)
pub const GSB_ENDPOINT: &str = "https://safebrowsing.googleapis.com/v4/threatMatches:find";
/// Environment variable holding the Safe Browsing API key
pub const GSB_API_KEY_ENV: &str = "GSB_API_KEY";
pub const GSB_CLIENT_ID: &str = "url-checker";
pub const GSB_CLIENT_VERSION: &str = "1.0";
/// Threat categories every lookup asks about
pub const GSB_THREAT_TYPES: [&str; 4] = [
    "MALWARE",
    "SOCIAL_ENGINEERING",
    "UNWANTED_SOFTWARE",
    "POTENTIALLY_HARMFUL_APPLICATION",
];
pub const GSB_PLATFORM_TYPES: [&str; 1] = ["ANY_PLATFORM"];
pub const GSB_THREAT_ENTRY_TYPES: [&str; 1] = ["URL"];
