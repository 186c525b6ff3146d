use axum::{Json, extract::rejection::JsonRejection, http::StatusCode, response::IntoResponse};
use serde::Serialize;
use thiserror::Error as ThisError;
use tracing::error;

#[derive(Debug, ThisError)]
pub enum ApiError {
    #[error("movie not found")]
    NotFound,

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("Ractor error: {0}")]
    Rpc(String),
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::InvalidInput(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, error_body) = match self {
            ApiError::NotFound => {
                let body = ApiErrorObject {
                    code: "NOT_FOUND".to_string(),
                    message: "movie not found".to_string(),
                };
                (StatusCode::NOT_FOUND, body)
            }

            ApiError::InvalidInput(message) => {
                let body = ApiErrorObject {
                    code: "INVALID_INPUT".to_string(),
                    message,
                };
                (StatusCode::BAD_REQUEST, body)
            }

            ApiError::Rpc(detail) => {
                error!(error = %detail, "catalog actor RPC failed");
                let body = ApiErrorObject {
                    code: "INTERNAL_ERROR".to_string(),
                    message: "An internal server error occurred.".to_string(),
                };
                (StatusCode::INTERNAL_SERVER_ERROR, body)
            }
        };
        (status, Json(ApiErrorBody { inner: error_body })).into_response()
    }
}

/// Standardized API error response payload.
#[derive(Serialize)]
pub struct ApiErrorObject {
    pub code: String,
    pub message: String,
}

#[derive(Serialize)]
pub struct ApiErrorBody {
    #[serde(rename = "error")]
    pub inner: ApiErrorObject,
}
