//!
//! # Custom Error Handling
//!
//! This module defines the custom error type `AppError` used throughout the application.
//! Every failure a handler can produce is one of its variants, and each variant maps to
//! exactly one HTTP status code.
//!
//! `AppError` implements `actix_web::error::ResponseError` so that handlers can return
//! `Result<_, AppError>` and have failures rendered as the uniform JSON envelope
//! `{"code": <status>, "message": <text>}`.

use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};
use serde_json::json;
use std::fmt;

/// Represents all possible errors that can occur within the application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    /// Malformed or missing request fields (HTTP 400).
    BadRequest(String),
    /// Credentials were supplied but do not match (HTTP 403).
    Forbidden(String),
    /// The requested task, user or route does not exist (HTTP 404).
    NotFound(String),
    /// The request collides with existing state, e.g. a duplicate email (HTTP 409).
    Conflict(String),
    /// A function was called with an argument outside its domain (HTTP 500).
    /// This is a programming error, never caused by client input.
    InvalidArgument(String),
    /// Represents an unexpected server-side error (HTTP 500).
    InternalServerError(String),
}

impl AppError {
    /// The human-readable message carried by this error.
    pub fn message(&self) -> &str {
        match self {
            AppError::BadRequest(msg)
            | AppError::Forbidden(msg)
            | AppError::NotFound(msg)
            | AppError::Conflict(msg)
            | AppError::InvalidArgument(msg)
            | AppError::InternalServerError(msg) => msg,
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AppError::BadRequest(msg) => write!(f, "Bad Request: {}", msg),
            AppError::Forbidden(msg) => write!(f, "Forbidden: {}", msg),
            AppError::NotFound(msg) => write!(f, "Not Found: {}", msg),
            AppError::Conflict(msg) => write!(f, "Conflict: {}", msg),
            AppError::InvalidArgument(msg) => write!(f, "Invalid Argument: {}", msg),
            AppError::InternalServerError(msg) => write!(f, "Internal Server Error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

/// Converts `AppError` variants into enveloped `HttpResponse` objects.
impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Forbidden(_) => StatusCode::FORBIDDEN,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::InvalidArgument(_) | AppError::InternalServerError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        if status.is_server_error() {
            log::error!("{}", self);
        }
        HttpResponse::build(status).json(json!({
            "code": status.as_u16(),
            "message": self.message()
        }))
    }
}

/// Converts `serde_json::Error` into `AppError::InternalServerError`.
///
/// Client bodies are rejected by the JSON extractor before reaching handlers, so a
/// serde error surfacing through `?` means server-owned data (seed fixtures) is broken.
impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> AppError {
        AppError::InternalServerError(format!("Invalid JSON data: {}", error))
    }
}
