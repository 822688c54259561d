//! url_checker library: checks where a URL lands and whether that is safe.
//!
//! A check follows the URL's redirects, flags an HTTPS to HTTP downgrade
//! between the input and the final URL, and looks the final URL up in Google
//! Safe Browsing. The same check backs the `url_checker check` command and the
//! `GET /check` endpoint of `url_checker serve`.
//!
//! # Example
//!
//! ```no_run
//! use url_checker::{run_check, ApiKey, CheckerConfig};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let api_key = ApiKey::resolve(None, std::env::var("GSB_API_KEY").ok())?;
//! let config = CheckerConfig::new(api_key);
//!
//! let result = run_check(&config, "https://example.com").await?;
//! println!("{} -> {:?} (listed: {})", "https://example.com", result.final_url, result.gsb_listed);
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime.

mod check;
pub mod config;
mod error_handling;
mod fetch;
pub mod initialization;
mod security;
pub mod server;

// Re-export public API
pub use check::{CheckFailure, CheckResult, CheckStage, UrlChecker};
pub use config::{ApiKey, CheckerConfig, LogFormat, LogLevel, ServerConfig};
pub use error_handling::{CheckError, InitializationError};
pub use fetch::{resolve_final_url, HttpRedirectResolver, RedirectResolver};
pub use security::{is_https_to_http_downgrade, SafeBrowsingClient, ThreatChecker};

/// Runs a single check with a freshly built HTTP client.
///
/// Used by the one-shot CLI; long-running callers should build a checker once
/// with [`initialization::init_checker`] and reuse it.
///
/// # Errors
///
/// Returns an error if the HTTP client cannot be built or any step of the
/// check fails. The error's `Display` is the user-facing message.
pub async fn run_check(config: &CheckerConfig, url: &str) -> anyhow::Result<CheckResult> {
    let checker = initialization::init_checker(config)?;
    Ok(checker.check(url).await?)
}
