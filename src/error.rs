//! Application error type and its HTTP mapping.
//!
//! Every error is rendered as
//!
//! ```json
//! { "error": { "code": "not_found", "message": "Link with id 7 not found", "details": { "id": 7 } } }
//! ```
//!
//! Alias conflicts are client errors and share the `400 Bad Request` status
//! with validation failures; the `code` field tells them apart.

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};
use thiserror::Error;

use crate::utils::db_error::is_unique_violation_on_short_name;

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

/// Machine-readable error payload.
#[derive(Debug, Serialize)]
pub struct ErrorInfo {
    pub code: &'static str,
    pub message: String,
    pub details: Value,
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{message}")]
    Validation { message: String, details: Value },
    #[error("{message}")]
    NotFound { message: String, details: Value },
    #[error("{message}")]
    Conflict { message: String, details: Value },
    #[error("{message}")]
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }
    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }
    pub fn conflict(message: impl Into<String>, details: Value) -> Self {
        Self::Conflict {
            message: message.into(),
            details,
        }
    }
    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }

    /// The alias is already held by another link.
    pub fn short_name_taken(short_name: &str) -> Self {
        Self::conflict(
            format!("Short name '{}' already exists", short_name),
            json!({ "short_name": short_name }),
        )
    }

    /// No link has this id.
    pub fn link_not_found(id: i64) -> Self {
        Self::not_found(
            format!("Link with id {} not found", id),
            json!({ "id": id }),
        )
    }

    /// Maps a storage error raised while writing `short_name`.
    ///
    /// Unique violations on the alias constraint become [`AppError::Conflict`];
    /// everything else goes through the generic `sqlx::Error` conversion.
    pub fn from_write_error(e: sqlx::Error, short_name: &str) -> Self {
        if is_unique_violation_on_short_name(&e) {
            tracing::warn!(short_name, "Alias taken concurrently, rejected by constraint");
            return Self::short_name_taken(short_name);
        }

        e.into()
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } | AppError::Conflict { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn to_error_info(&self) -> ErrorInfo {
        let (code, message, details) = match self {
            AppError::Validation { message, details } => ("validation_error", message, details),
            AppError::NotFound { message, details } => ("not_found", message, details),
            AppError::Conflict { message, details } => ("conflict", message, details),
            AppError::Internal { message, details } => ("internal_error", message, details),
        };

        ErrorInfo {
            code,
            message: message.clone(),
            details: details.clone(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: self.to_error_info(),
        };

        (self.status_code(), Json(body)).into_response()
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        tracing::error!(error = %e, "Database error");
        AppError::internal("Database error", json!({}))
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        let message = match &rejection {
            JsonRejection::MissingJsonContentType(_) => {
                "Request must include 'Content-Type: application/json'"
            }
            JsonRejection::JsonSyntaxError(_) => "Request body is not valid JSON",
            JsonRejection::JsonDataError(_) => "Request body has invalid field types",
            _ => "Failed to read request body",
        };

        AppError::bad_request(message, json!({ "reason": rejection.body_text() }))
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        AppError::bad_request("Validation failed", json!({ "fields": errors }))
    }
}
