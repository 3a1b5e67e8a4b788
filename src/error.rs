//! Application error type and its HTTP representation.
//!
//! Every fallible operation in the library returns [`AppError`]. The Request
//! layer turns it into a JSON body of the form:
//!
//! ```json
//! { "error": { "code": "not_found", "message": "Short link not found", "details": { "code": "abc123" } } }
//! ```

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};

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

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Input rejected before reaching storage.
    #[error("{message}")]
    Validation { message: String },

    /// No link exists for the requested short code.
    #[error("Short link not found")]
    NotFound { code: String },

    /// Every generated candidate collided with an existing code.
    #[error("Failed to generate a unique short code after {attempts} attempts")]
    CodeGenerationExhausted { attempts: usize },

    /// Storage rejected the insert on the `short_code` unique constraint.
    ///
    /// Raised when two creations race past the existence check with the same
    /// candidate. Not retried.
    #[error("Short code '{code}' already exists")]
    DuplicateCode { code: String },

    #[error("Storage error: {0}")]
    Storage(#[from] sqlx::Error),
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn not_found(code: impl Into<String>) -> Self {
        Self::NotFound { code: code.into() }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::CodeGenerationExhausted { .. }
            | AppError::DuplicateCode { .. }
            | AppError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Builds the serializable error payload.
    ///
    /// Storage errors are reported with a generic message; the underlying
    /// cause stays in the logs.
    pub fn to_error_info(&self) -> ErrorInfo {
        match self {
            AppError::Validation { message } => ErrorInfo {
                code: "validation_error",
                message: message.clone(),
                details: json!({}),
            },
            AppError::NotFound { code } => ErrorInfo {
                code: "not_found",
                message: self.to_string(),
                details: json!({ "code": code }),
            },
            AppError::CodeGenerationExhausted { attempts } => ErrorInfo {
                code: "code_generation_exhausted",
                message: self.to_string(),
                details: json!({ "attempts": attempts }),
            },
            AppError::DuplicateCode { code } => ErrorInfo {
                code: "duplicate_code",
                message: self.to_string(),
                details: json!({ "code": code }),
            },
            AppError::Storage(_) => ErrorInfo {
                code: "internal_error",
                message: "Database error".to_string(),
                details: json!({}),
            },
        }
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut messages: Vec<String> = errors
            .field_errors()
            .iter()
            .flat_map(|(field, errs)| {
                errs.iter().map(move |e| match &e.message {
                    Some(message) => message.to_string(),
                    None => format!("{field}: {}", e.code),
                })
            })
            .collect();
        messages.sort();

        AppError::bad_request(messages.join("; "))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }

        let body = ErrorBody {
            error: self.to_error_info(),
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_maps_to_bad_request() {
        let err = AppError::bad_request("original_url is required");
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.to_string(), "original_url is required");

        let info = err.to_error_info();
        assert_eq!(info.code, "validation_error");
        assert_eq!(info.message, "original_url is required");
    }

    #[test]
    fn test_not_found_carries_code() {
        let err = AppError::not_found("abc123");
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);

        let info = err.to_error_info();
        assert_eq!(info.code, "not_found");
        assert_eq!(info.details["code"], "abc123");
    }

    #[test]
    fn test_server_side_errors() {
        let exhausted = AppError::CodeGenerationExhausted { attempts: 10 };
        assert_eq!(exhausted.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(exhausted.to_string().contains("10 attempts"));

        let duplicate = AppError::DuplicateCode {
            code: "Ab3dE9".to_string(),
        };
        assert_eq!(duplicate.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(duplicate.to_error_info().code, "duplicate_code");
    }

    #[test]
    fn test_storage_error_hides_cause() {
        let err = AppError::from(sqlx::Error::PoolTimedOut);
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);

        let info = err.to_error_info();
        assert_eq!(info.code, "internal_error");
        assert_eq!(info.message, "Database error");
    }
}
