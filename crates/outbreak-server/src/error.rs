use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use outbreak_classifier::error::SubmitError;
use outbreak_core::gate::INCOMPLETE_INPUT_MESSAGE;
use outbreak_core::CoreError;

/// Unified API error type for all route handlers.
#[derive(Debug)]
pub enum ApiError {
    NotFound(String),
    BadRequest(String),
    /// The completeness gate rejected the submission.
    Incomplete { missing: Vec<String> },
    Internal(String),
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    missing: Vec<String>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message, missing) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg, Vec::new()),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg, Vec::new()),
            ApiError::Incomplete { missing } => (
                StatusCode::UNPROCESSABLE_ENTITY,
                INCOMPLETE_INPUT_MESSAGE.to_string(),
                missing,
            ),
            ApiError::Internal(msg) => {
                tracing::error!("internal error: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                    Vec::new(),
                )
            }
        };

        (status, Json(ErrorBody { error: message, missing })).into_response()
    }
}

impl From<CoreError> for ApiError {
    fn from(e: CoreError) -> Self {
        match e {
            CoreError::UnknownDomain(id) => ApiError::NotFound(format!("domain not found: {id}")),
            CoreError::IncompleteInput { missing } => ApiError::Incomplete { missing },
            err @ CoreError::InvalidLabel(_) => ApiError::Internal(err.to_string()),
            other => ApiError::BadRequest(other.to_string()),
        }
    }
}

impl From<SubmitError> for ApiError {
    fn from(e: SubmitError) -> Self {
        match e {
            SubmitError::Incomplete { missing } => ApiError::Incomplete { missing },
            SubmitError::Input(e) => e.into(),
            SubmitError::Classifier(e) => ApiError::Internal(e.to_string()),
        }
    }
}
