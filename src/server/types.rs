//! Server response types.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::check::CheckResult;

/// Error responses of the check service.
///
/// Every variant except `NotFound` carries a full check record, so clients
/// always receive the same JSON shape from `/check`.
#[derive(Debug)]
pub enum ApiError {
    /// Missing or malformed `url` parameter (400)
    BadRequest(CheckResult),
    /// Resolution or threat lookup failed (502)
    BadGateway(CheckResult),
    /// Unknown route (404)
    NotFound,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            Self::BadRequest(result) => (StatusCode::BAD_REQUEST, Json(result)).into_response(),
            Self::BadGateway(result) => (StatusCode::BAD_GATEWAY, Json(result)).into_response(),
            Self::NotFound => {
                (StatusCode::NOT_FOUND, Json(json!({"error": "Not Found"}))).into_response()
            }
        }
    }
}
