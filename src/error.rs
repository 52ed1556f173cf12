//! Service Error Type
//!
//! One typed error shared by the store layer and the HTTP handlers. Handlers
//! return `Result<_, ApiError>`; the `IntoResponse` impl maps each variant to
//! a status code and a JSON body naming the offending field where one exists.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// A write-path field failed format validation. Raised before any store
    /// mutation takes place.
    #[error("{field}: {message}")]
    Validation {
        field: &'static str,
        message: String,
    },

    /// A uniqueness invariant would be violated: duplicate registration
    /// phone, duplicate (owner, phone) contact, or duplicate
    /// (reporter, phone) spam report.
    #[error("duplicate {0}")]
    UniqueViolation(&'static str),

    #[error("invalid credentials")]
    InvalidCredentials,

    #[error("missing or expired bearer token")]
    Unauthorized,

    #[error("not found")]
    NotFound,

    #[error("internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

/// Wire format for rejected requests.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::UniqueViolation(_) => StatusCode::CONFLICT,
            ApiError::InvalidCredentials | ApiError::Unauthorized => StatusCode::UNAUTHORIZED,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let ApiError::Internal(err) = &self {
            tracing::error!("Internal error: {:?}", err);
        }

        let field = match &self {
            ApiError::Validation { field, .. } => Some((*field).to_string()),
            _ => None,
        };

        let body = ErrorResponse {
            error: self.to_string(),
            field,
        };

        (self.status(), Json(body)).into_response()
    }
}
