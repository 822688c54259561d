//! HTTP check service.
//!
//! Provides one endpoint:
//! - `GET /check?url=<url>` - runs a URL check and returns the result as JSON
//!
//! Every other route answers 404 with `{"error":"Not Found"}`.

mod handlers;
mod types;

use std::sync::Arc;

use anyhow::Context;
use axum::routing::get;
use axum::Router;
use tokio::net::TcpListener;

use crate::check::UrlChecker;
use crate::config::ServerConfig;
use crate::fetch::RedirectResolver;
use crate::initialization::init_checker;
use crate::security::ThreatChecker;

use handlers::{check_handler, not_found_handler};
pub use handlers::{INVALID_SCHEME_MESSAGE, MISSING_URL_MESSAGE};
pub use types::ApiError;

/// Builds the service router around a shared checker.
pub fn router<R, T>(checker: Arc<UrlChecker<R, T>>) -> Router
where
    R: RedirectResolver + 'static,
    T: ThreatChecker + 'static,
{
    Router::new()
        .route("/check", get(check_handler::<R, T>))
        .fallback(not_found_handler)
        .with_state(checker)
}

/// Serves the check endpoint on an already bound listener until Ctrl-C.
pub async fn serve<R, T>(listener: TcpListener, checker: Arc<UrlChecker<R, T>>) -> anyhow::Result<()>
where
    R: RedirectResolver + 'static,
    T: ThreatChecker + 'static,
{
    axum::serve(listener, router(checker))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| anyhow::anyhow!("Server error: {}", e))
}

/// Creates the checker from `config`, binds `0.0.0.0:<port>` and serves.
///
/// # Errors
///
/// Fails if the HTTP client cannot be built, the port cannot be bound, or the
/// server stops with an I/O error.
pub async fn start_server(config: ServerConfig) -> anyhow::Result<()> {
    let checker = init_checker(&config.checker).context("Failed to initialize URL checker")?;

    let listener = TcpListener::bind(("0.0.0.0", config.port))
        .await
        .with_context(|| format!("Failed to bind server to port {}", config.port))?;

    log::info!("Server listening on http://localhost:{}", config.port);
    log::info!(
        "  - Check: http://localhost:{}/check?url=https://example.com",
        config.port
    );

    serve(listener, Arc::new(checker)).await
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::warn!("Failed to listen for Ctrl-C: {}", e);
        std::future::pending::<()>().await;
    }
    log::info!("Shutting down");
}
