use crate::amadeus::TokenError;
use crate::models::ValidationError;
use axum::response::IntoResponse;
use axum::Json;
use http::StatusCode;
use serde_json::{json, Value};
use thiserror::Error;

/// Every way a flight search can fail, mapped to a status and body at the boundary
#[derive(Debug, Error)]
pub enum ApiError {
    /// The caller sent an incomplete or malformed search
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// No access token could be obtained
    #[error("Failed to obtain Amadeus access token: {0}")]
    Auth(#[from] TokenError),
    /// The flight-offers endpoint answered with a non-success status
    #[error("Amadeus API returned {status}")]
    Upstream { status: StatusCode, details: Value },
    /// Anything else, e.g. a network failure while searching
    #[error("{0}")]
    Server(String),
}

impl ApiError {
    /// Create new Internal Server Error (500) with a detail message
    pub fn internal<S: ToString>(detail: S) -> Self {
        Self::Server(detail.to_string())
    }

    /// HTTP status code sent to the caller
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Auth(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Upstream { status, .. } => *status,
            ApiError::Server(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// JSON body sent to the caller
    pub fn body(&self) -> Value {
        match self {
            ApiError::Validation(err) => json!({ "error": err.to_string() }),
            ApiError::Auth(_) | ApiError::Server(_) => json!({
                "error": "server_error",
                "details": self.to_string(),
            }),
            ApiError::Upstream { details, .. } => json!({
                "error": "amadeus_error",
                "details": details,
            }),
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        Self::internal(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        (self.status_code(), Json(self.body())).into_response()
    }
}
