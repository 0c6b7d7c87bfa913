//! Application error type and its HTTP mapping.
//!
//! Every handler returns `Result<_, AppError>`. Client errors carry a fixed,
//! user-facing message; internal errors are logged here and answered with a
//! generic message so no detail leaks to the caller.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;
use validator::ValidationErrors;

/// JSON error body returned for every non-2xx response.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    #[schema(example = "User not found")]
    pub message: String,
}

#[derive(Debug, Error)]
pub enum AppError {
    /// Path parameter does not have the 8-4-4-4-12 hex shape.
    #[error("Invalid userId format")]
    InvalidUserId,

    /// `username`, `age` or `hobby` missing, empty or of the wrong type.
    #[error("Username, age and hobby are required fields")]
    MissingFields,

    /// Request body could not be read as JSON at all.
    #[error("Invalid request body")]
    MalformedBody,

    #[error("User not found")]
    UserNotFound,

    /// No route matched the request.
    #[error("Not Found")]
    RouteNotFound,

    /// Anything unexpected. The detail is logged, never sent.
    #[error("internal error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn internal(detail: impl Into<String>) -> Self {
        Self::Internal(detail.into())
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidUserId | Self::MissingFields | Self::MalformedBody => {
                StatusCode::BAD_REQUEST
            }
            Self::UserNotFound | Self::RouteNotFound => StatusCode::NOT_FOUND,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message placed in the response body.
    pub fn public_message(&self) -> String {
        match self {
            Self::Internal(_) => "Internal Server Error".to_string(),
            other => other.to_string(),
        }
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        tracing::debug!(%errors, "user payload rejected");
        Self::MissingFields
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if let Self::Internal(detail) = &self {
            tracing::error!(error = %detail, "request failed");
        }

        let body = ErrorBody {
            message: self.public_message(),
        };

        (status, Json(body)).into_response()
    }
}
