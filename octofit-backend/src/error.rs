// src/error.rs

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use sea_orm::{DbErr, SqlErr};
use serde::Serialize;
use serde_json::json;
use std::collections::HashMap;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    DbErr(#[from] DbErr),

    #[error("Item not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Multiple validation errors")]
    ValidationErrors(Vec<String>),
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::DbErr(db_err) => match classify_db_error(db_err) {
                DbErrorKind::NotFound => StatusCode::NOT_FOUND,
                DbErrorKind::Constraint(_) => StatusCode::BAD_REQUEST,
                DbErrorKind::Other => StatusCode::INTERNAL_SERVER_ERROR,
            },
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::ValidationError(_) | AppError::ValidationErrors(_) => {
                StatusCode::BAD_REQUEST
            }
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status_code() == StatusCode::NOT_FOUND
    }

    pub fn is_validation(&self) -> bool {
        self.status_code() == StatusCode::BAD_REQUEST
    }
}

enum DbErrorKind {
    NotFound,
    Constraint(String),
    Other,
}

// 一意制約・外部キー制約の違反はクライアント起因のエラーとして扱う
fn classify_db_error(db_err: &DbErr) -> DbErrorKind {
    if let DbErr::RecordNotFound(_) = db_err {
        return DbErrorKind::NotFound;
    }
    match db_err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(detail)) => {
            DbErrorKind::Constraint(format!("Unique constraint violated: {}", detail))
        }
        Some(SqlErr::ForeignKeyConstraintViolation(detail)) => {
            DbErrorKind::Constraint(format!("Referenced record does not exist: {}", detail))
        }
        _ => DbErrorKind::Other,
    }
}

// axum でエラーをHTTPレスポンスに変換するための実装
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let error_response = match self {
            AppError::DbErr(db_err) => match classify_db_error(&db_err) {
                DbErrorKind::NotFound => {
                    let entity = match &db_err {
                        DbErr::RecordNotFound(entity) => entity.clone(),
                        _ => String::new(),
                    };
                    ErrorResponse::new(
                        "The requested resource was not found",
                        "not_found",
                    )
                    .with_details(json!({ "entity": entity }))
                }
                DbErrorKind::Constraint(message) => {
                    tracing::warn!(error = ?db_err, "Constraint violation");
                    ErrorResponse::new(message, "validation_error")
                }
                DbErrorKind::Other => {
                    // サーバーログには詳細を出す
                    tracing::error!(error = ?db_err, "Database error");
                    let (message, details) = match &db_err {
                        DbErr::Exec(_) => (
                            "A database operation failed",
                            Some(json!({ "operation": "exec", "hint": "Check database connection" })),
                        ),
                        DbErr::Query(_) => (
                            "A database query failed",
                            Some(json!({ "operation": "query", "hint": "Check query syntax" })),
                        ),
                        _ => ("A database error occurred", None),
                    };
                    let response = ErrorResponse::new(message, "database_error");
                    match details {
                        Some(details) => response.with_details(details),
                        None => response,
                    }
                }
            },
            AppError::NotFound(message) => ErrorResponse::new(message, "not_found"),
            AppError::ValidationError(message) => ErrorResponse::new(message, "validation_error"),
            AppError::ValidationErrors(errors) => {
                let mut field_errors = HashMap::new();
                for error in &errors {
                    if let Some((field, message)) = error.split_once(": ") {
                        field_errors
                            .entry(field.to_string())
                            .or_insert_with(Vec::new)
                            .push(message.to_string());
                    }
                }
                let errors_array: Vec<serde_json::Value> =
                    errors.iter().map(|e| json!({"message": e})).collect();
                ErrorResponse {
                    validation_errors: Some(field_errors),
                    errors: Some(errors_array),
                    ..ErrorResponse::new("Validation failed", "validation_errors")
                }
            }
        };

        (status, Json(error_response)).into_response()
    }
}

// Result 型のエイリアス
pub type AppResult<T> = Result<T, AppError>;

/// 統一的なエラーレスポンス構造
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub validation_errors: Option<HashMap<String, Vec<String>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<serde_json::Value>>,
    pub error_type: String,
}

impl ErrorResponse {
    fn new(message: impl Into<String>, error_type: &str) -> Self {
        let message = message.into();
        Self {
            success: false,
            error: message.clone(),
            message,
            details: None,
            validation_errors: None,
            errors: None,
            error_type: error_type.to_string(),
        }
    }

    fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }
}
