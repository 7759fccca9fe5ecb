//! Unified error handling
//!
//! Application error type and its HTTP mapping:
//! - [`AppError`] - application error enum
//! - [`FieldErrors`] - per-field validation messages
//!
//! # HTTP mapping
//!
//! | Variant | Status | Body |
//! |---------|--------|------|
//! | NotFound | 404 | empty |
//! | Validation | 400 | `{"field": ["message", ...]}` |
//! | Unauthorized | 401 | empty |
//! | Database / Internal | 500 | empty (detail goes to the log) |

use std::collections::BTreeMap;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use tracing::error;

/// Key for errors that span more than one field (e.g. password confirmation).
pub const NON_FIELD_ERRORS: &str = "non_field_errors";

/// Per-field validation errors, serialized as `{"field": ["message", ...]}`.
///
/// Collected during payload validation; handlers never persist anything
/// while the map is non-empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FieldErrors(BTreeMap<String, Vec<String>>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a message to a field's error list.
    pub fn push(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.entry(field.into()).or_default().push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Ok when nothing was collected, otherwise a `Validation` error.
    pub fn into_result(self) -> Result<(), AppError> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(AppError::Validation(self))
        }
    }
}

/// 应用错误枚举
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// 资源不存在 (404)
    #[error("resource not found: {0}")]
    NotFound(String),

    /// 验证失败 (400)
    #[error("validation failed")]
    Validation(FieldErrors),

    /// 未登录 (401)
    #[error("authentication required")]
    Unauthorized,

    /// 数据库错误 (500)
    #[error("database error: {0}")]
    Database(String),

    /// 内部错误 (500)
    #[error("internal server error: {0}")]
    Internal(String),
}

// ========== Helper Constructors ==========

impl AppError {
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    /// Single-field validation error.
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        let mut errors = FieldErrors::new();
        errors.push(field, message);
        Self::Validation(errors)
    }

    pub fn database(msg: impl Into<String>) -> Self {
        Self::Database(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        Self::Database(e.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            // Missing rows answer with a bare 404, no body.
            AppError::NotFound(_) => StatusCode::NOT_FOUND.into_response(),

            AppError::Validation(errors) => {
                (StatusCode::BAD_REQUEST, Json(errors)).into_response()
            }

            AppError::Unauthorized => StatusCode::UNAUTHORIZED.into_response(),

            AppError::Database(msg) => {
                error!(target: "database", error = %msg, "Database error occurred");
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }

            AppError::Internal(msg) => {
                error!(target: "internal", error = %msg, "Internal error occurred");
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
        }
    }
}
