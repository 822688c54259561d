//! Configuration types.
//!
//! This module defines the logging enums used by the CLI and the resolved
//! configuration values handed to the checker and the HTTP service at startup.

use std::fmt;
use std::time::Duration;

use clap::ValueEnum;

use crate::config::constants::{DEFAULT_USER_AGENT, GSB_ENDPOINT, SERVER_TIMEOUT};
use crate::error_handling::CheckError;

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Google Safe Browsing API key.
///
/// The key is mandatory configuration: there is no built-in default. `Debug`
/// output is redacted so the key never ends up in logs.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Resolves the API key from an explicit override, then from the value of
    /// the environment variable (as read once at startup).
    ///
    /// Blank values are ignored.
    ///
    /// # Errors
    ///
    /// Returns `CheckError::Config` if neither source yields a key.
    pub fn resolve(
        explicit: Option<String>,
        environment: Option<String>,
    ) -> Result<Self, CheckError> {
        explicit
            .into_iter()
            .chain(environment)
            .map(|key| key.trim().to_string())
            .find(|key| !key.is_empty())
            .map(ApiKey)
            .ok_or_else(|| {
                CheckError::Config("Google Safe Browsing API key not configured".to_string())
            })
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(<redacted>)")
    }
}

/// Settings shared by both entry points.
///
/// Built once at startup and passed into the checker; nothing below this
/// point reads the process environment.
#[derive(Debug, Clone)]
pub struct CheckerConfig {
    /// Safe Browsing API key
    pub api_key: ApiKey,
    /// Safe Browsing lookup endpoint
    pub gsb_endpoint: String,
    /// Timeout applied separately to redirect resolution and to the lookup
    pub timeout: Duration,
    /// User-Agent sent while resolving redirects
    pub user_agent: String,
}

impl CheckerConfig {
    /// Creates a configuration with the default endpoint, user agent and the
    /// HTTP service timeout.
    pub fn new(api_key: ApiKey) -> Self {
        Self {
            api_key,
            gsb_endpoint: GSB_ENDPOINT.to_string(),
            timeout: SERVER_TIMEOUT,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_gsb_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.gsb_endpoint = endpoint.into();
        self
    }
}

/// HTTP service configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Port to listen on (all interfaces)
    pub port: u16,
    pub checker: CheckerConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_conversion() {
        assert_eq!(
            log::LevelFilter::from(LogLevel::Error),
            log::LevelFilter::Error
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Warn),
            log::LevelFilter::Warn
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Info),
            log::LevelFilter::Info
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Debug),
            log::LevelFilter::Debug
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Trace),
            log::LevelFilter::Trace
        );
    }

    #[test]
    fn test_api_key_prefers_explicit_override() {
        let key = ApiKey::resolve(Some("explicit".into()), Some("from-env".into()))
            .expect("key should resolve");
        assert_eq!(key.as_str(), "explicit");
    }

    #[test]
    fn test_api_key_falls_back_to_environment() {
        let key = ApiKey::resolve(None, Some("from-env".into())).expect("key should resolve");
        assert_eq!(key.as_str(), "from-env");
    }

    #[test]
    fn test_api_key_blank_override_is_ignored() {
        let key = ApiKey::resolve(Some("   ".into()), Some("from-env".into()))
            .expect("key should resolve");
        assert_eq!(key.as_str(), "from-env");
    }

    #[test]
    fn test_api_key_missing_is_config_error() {
        let err = ApiKey::resolve(None, None).unwrap_err();
        assert!(matches!(err, CheckError::Config(_)));
        assert_eq!(err.to_string(), "Google Safe Browsing API key not configured");

        let err = ApiKey::resolve(Some(String::new()), Some(" ".into())).unwrap_err();
        assert!(matches!(err, CheckError::Config(_)));
    }

    #[test]
    fn test_api_key_debug_is_redacted() {
        let key = ApiKey::resolve(Some("super-secret".into()), None).unwrap();
        let debug = format!("{:?}", key);
        assert!(!debug.contains("super-secret"));
    }

    #[test]
    fn test_checker_config_defaults() {
        let key = ApiKey::resolve(Some("k".into()), None).unwrap();
        let config = CheckerConfig::new(key);
        assert_eq!(config.timeout, SERVER_TIMEOUT);
        assert_eq!(config.gsb_endpoint, GSB_ENDPOINT);
        assert_eq!(config.user_agent, DEFAULT_USER_AGENT);

        let config = config
            .with_timeout(Duration::from_secs(8))
            .with_gsb_endpoint("http://127.0.0.1:9/find");
        assert_eq!(config.timeout, Duration::from_secs(8));
        assert_eq!(config.gsb_endpoint, "http://127.0.0.1:9/find");
    }
}
