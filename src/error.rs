//! Application-wide error type and its HTTP representation.
//!
//! Every layer returns [`AppError`]. Handlers convert it into a JSON response
//! of the form:
//!
//! ```json
//! { "error": { "code": "not_found", "message": "URL not found", "details": {} } }
//! ```

use axum::{
    Json,
    extract::rejection::JsonRejection,
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
#[derive(Debug, Clone, Serialize)]
pub struct ErrorInfo {
    pub code: &'static str,
    pub message: String,
    pub details: Value,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Malformed input: bad URL shape, too many list entries, bad custom code.
    #[error("{message}")]
    Validation { message: String, details: Value },

    /// A caller-chosen code is already taken, or the store rejected an insert
    /// on a unique constraint.
    #[error("{message}")]
    Conflict { message: String, details: Value },

    #[error("{message}")]
    NotFound { message: String, details: Value },

    /// The record exists but its expiration instant has passed.
    #[error("{message}")]
    Expired { message: String, details: Value },

    /// Generic client-facing failure of a create/update call.
    #[error("{message}")]
    CreationFailed { message: String, details: Value },

    #[error("{message}")]
    Persistence { message: String, details: Value },

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
    pub fn conflict(message: impl Into<String>, details: Value) -> Self {
        Self::Conflict {
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
    pub fn expired(message: impl Into<String>, details: Value) -> Self {
        Self::Expired {
            message: message.into(),
            details,
        }
    }
    pub fn creation_failed(message: impl Into<String>, details: Value) -> Self {
        Self::CreationFailed {
            message: message.into(),
            details,
        }
    }
    pub fn persistence(message: impl Into<String>, details: Value) -> Self {
        Self::Persistence {
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

    /// Name of the violated unique constraint, for inserts rejected by the store.
    ///
    /// `None` for every other error, including conflicts detected before a write.
    pub fn violated_constraint(&self) -> Option<&str> {
        match self {
            Self::Conflict { details, .. } => details.get("constraint").and_then(Value::as_str),
            _ => None,
        }
    }

    /// Collapses store-level failures into [`AppError::CreationFailed`].
    ///
    /// Used by endpoints that report every persistence failure with a
    /// client-error status. All other variants pass through unchanged.
    pub fn into_creation_failure(self) -> Self {
        match self {
            Self::Persistence { message, details } => Self::CreationFailed { message, details },
            other => other,
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation { .. } | Self::Conflict { .. } | Self::CreationFailed { .. } => {
                StatusCode::BAD_REQUEST
            }
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Expired { .. } => StatusCode::GONE,
            Self::Persistence { .. } | Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn code(&self) -> &'static str {
        match self {
            Self::Validation { .. } => "validation_error",
            Self::Conflict { .. } => "conflict",
            Self::NotFound { .. } => "not_found",
            Self::Expired { .. } => "expired",
            Self::CreationFailed { .. } => "creation_failed",
            Self::Persistence { .. } => "persistence_error",
            Self::Internal { .. } => "internal_error",
        }
    }

    pub fn to_error_info(&self) -> ErrorInfo {
        let (message, details) = match self {
            Self::Validation { message, details }
            | Self::Conflict { message, details }
            | Self::NotFound { message, details }
            | Self::Expired { message, details }
            | Self::CreationFailed { message, details }
            | Self::Persistence { message, details }
            | Self::Internal { message, details } => (message.clone(), details.clone()),
        };

        ErrorInfo {
            code: self.code(),
            message,
            details,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            tracing::error!(code = self.code(), "{}", self);
        }

        let body = ErrorBody {
            error: self.to_error_info(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        if let Some(db) = e.as_database_error()
            && db.is_unique_violation()
        {
            return AppError::conflict(
                "Unique constraint violation",
                json!({ "constraint": db.constraint() }),
            );
        }

        tracing::error!("Database error: {}", e);
        AppError::persistence("Database error", json!({}))
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::bad_request(
            rejection.body_text(),
            json!({ "rejected_status": rejection.status().as_u16() }),
        )
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut fields = serde_json::Map::new();
        collect_field_errors(&errors, "", &mut fields);

        let message = fields
            .values()
            .filter_map(|v| v.as_array().and_then(|a| a.first()))
            .filter_map(|v| v.as_str())
            .next()
            .unwrap_or("Validation failed")
            .to_string();

        AppError::bad_request(message, json!({ "fields": fields }))
    }
}

/// Flattens nested validation errors into `path -> [messages]`, e.g. `urls[0].title`.
fn collect_field_errors(
    errors: &validator::ValidationErrors,
    prefix: &str,
    out: &mut serde_json::Map<String, Value>,
) {
    use validator::ValidationErrorsKind;

    for (field, kind) in errors.errors() {
        let path = if prefix.is_empty() {
            field.to_string()
        } else {
            format!("{prefix}.{field}")
        };

        match kind {
            ValidationErrorsKind::Field(errs) => {
                let messages: Vec<String> = errs
                    .iter()
                    .map(|e| {
                        e.message
                            .as_ref()
                            .map(|m| m.to_string())
                            .unwrap_or_else(|| e.code.to_string())
                    })
                    .collect();
                out.insert(path, json!(messages));
            }
            ValidationErrorsKind::Struct(inner) => collect_field_errors(inner, &path, out),
            ValidationErrorsKind::List(items) => {
                for (index, inner) in items {
                    collect_field_errors(inner, &format!("{path}[{index}]"), out);
                }
            }
        }
    }
}
