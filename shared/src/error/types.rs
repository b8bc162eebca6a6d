//! Error type carried through the back-office

use super::codes::ErrorCode;
use serde_json::Value;
use std::collections::HashMap;
use thiserror::Error;

/// Application error with structured error code and details
///
/// - Standardized error codes via [`ErrorCode`]
/// - Human-readable message, shown to the user as-is
/// - Optional structured details (missing fields, offending input)
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct AppError {
    /// The error code identifying the type of error
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details (field-level errors, context, etc.)
    pub details: Option<HashMap<String, Value>>,
}

impl AppError {
    /// Create a new error with the default message for the error code
    pub fn new(code: ErrorCode) -> Self {
        Self {
            message: code.message().to_string(),
            code,
            details: None,
        }
    }

    /// Create a new error with a custom message
    pub fn with_message(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: None,
        }
    }

    /// Add a detail entry to this error
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.details
            .get_or_insert_with(HashMap::new)
            .insert(key.into(), value.into());
        self
    }

    /// Get a detail entry by key
    pub fn detail(&self, key: &str) -> Option<&Value> {
        self.details.as_ref().and_then(|d| d.get(key))
    }

    /// Whether this is a commit-time validation failure
    pub fn is_validation(&self) -> bool {
        matches!(
            self.code,
            ErrorCode::ValidationFailed
                | ErrorCode::RequiredField
                | ErrorCode::InvalidFormat
                | ErrorCode::ValueOutOfRange
                | ErrorCode::OrderItemsEmpty
                | ErrorCode::OrderItemMalformed
        )
    }

    // ==================== Convenience constructors ====================

    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::ValidationFailed, msg)
    }

    /// Create a validation error listing the required fields left empty
    pub fn missing_fields(msg: impl Into<String>, fields: &[&str]) -> Self {
        let fields: Vec<Value> = fields.iter().map(|f| Value::from(*f)).collect();
        Self::with_message(ErrorCode::ValidationFailed, msg).with_detail("fields", fields)
    }

    /// Create a required field error
    pub fn required_field(field: impl Into<String>) -> Self {
        let f = field.into();
        Self::with_message(ErrorCode::RequiredField, format!("{} is required", f))
            .with_detail("field", f)
    }

    /// Create an invalid format error for a field
    pub fn invalid_format(field: impl Into<String>, value: impl Into<String>) -> Self {
        let f = field.into();
        let v = value.into();
        Self::with_message(
            ErrorCode::InvalidFormat,
            format!("{} has an invalid value: {:?}", f, v),
        )
        .with_detail("field", f)
        .with_detail("value", v)
    }

    /// Create a value out of range error for a field
    pub fn out_of_range(field: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::ValueOutOfRange, msg).with_detail("field", field.into())
    }

    /// Create a not found error
    pub fn not_found(resource: impl Into<String>) -> Self {
        let r = resource.into();
        Self::with_message(ErrorCode::NotFound, format!("{} not found", r))
            .with_detail("resource", r)
    }

    /// Create an invalid request error
    pub fn invalid_request(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::InvalidRequest, msg)
    }

    /// Create an invalid choice error
    pub fn invalid_choice(field: impl Into<String>, value: impl Into<String>) -> Self {
        let f = field.into();
        let v = value.into();
        Self::with_message(
            ErrorCode::InvalidChoice,
            format!("{:?} is not a valid {}", v, f),
        )
        .with_detail("field", f)
        .with_detail("value", v)
    }

    /// Create an internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::InternalError, msg)
    }
}

/// Type alias for Result with AppError
pub type AppResult<T> = Result<T, AppError>;
