//! API error responses.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

/// Errors reported synchronously to API callers.
///
/// Neither variant mutates any state: a rejected write never reaches the
/// aggregator, and a failed lookup is answered from the current snapshot.
#[derive(Debug, Error)]
pub enum ApiError {
    /// A by-name lookup of a backend, frontend, or server missed.
    #[error("{kind} '{name}' not found")]
    NotFound { kind: &'static str, name: String },

    /// The submitted configuration failed to parse or validate.
    #[error("Invalid configuration: {0}")]
    Validation(String),

    /// The aggregator pipeline is gone; only reachable during shutdown.
    #[error("Service unavailable: {0}")]
    Unavailable(&'static str),
}

impl ApiError {
    pub fn not_found(kind: &'static str, name: impl Into<String>) -> Self {
        Self::NotFound {
            kind,
            name: name.into(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Unavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
        };
        (status, self.to_string()).into_response()
    }
}
