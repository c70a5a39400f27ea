//! Error types for the relay.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// Errors the relay reports to its callers.
///
/// Upstream failures never appear here: they only shorten the result.
#[derive(Debug, thiserror::Error)]
pub enum RelayError {
    /// The path parameter is not a valid user id.
    #[error("Invalid User ID provided.")]
    InvalidUserId,
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        let status = match &self {
            RelayError::InvalidUserId => StatusCode::BAD_REQUEST,
        };
        (
            status,
            Json(json!({"success": false, "error": self.to_string()})),
        )
            .into_response()
    }
}
