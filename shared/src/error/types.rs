//! Error types

use super::codes::ErrorCode;
use serde_json::Value;
use std::collections::HashMap;
use thiserror::Error;

/// Application error with structured error code and details
///
/// This is the primary error type of the back-office, providing:
/// - Standardized error codes via [`ErrorCode`]
/// - Human-readable messages (shown by the toast collaborator)
/// - Optional structured details for debugging
#[derive(Debug, Clone, Error, PartialEq)]
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

    // ==================== Convenience constructors ====================

    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::ValidationFailed, msg)
    }

    /// Create a product not found error for the given entry id
    pub fn product_not_found(id: impl Into<String>) -> Self {
        let id = id.into();
        Self::with_message(ErrorCode::ProductNotFound, format!("Product {} not found", id))
            .with_detail("id", id)
    }

    /// Create a category not found error for the given node id
    pub fn category_not_found(id: impl Into<String>) -> Self {
        let id = id.into();
        Self::with_message(ErrorCode::CategoryNotFound, format!("Category {} not found", id))
            .with_detail("id", id)
    }

    /// Create a bulk-operation-without-selection error
    pub fn nothing_selected() -> Self {
        Self::with_message(ErrorCode::NothingSelected, "Select at least one product first")
    }

    /// Create a confirmation-already-open error
    pub fn confirmation_pending() -> Self {
        Self::new(ErrorCode::ConfirmationPending)
    }

    /// Create an out of range error
    pub fn out_of_range(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::ValueOutOfRange, msg)
    }

    /// Create an invalid request error
    pub fn invalid_request(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::InvalidRequest, msg)
    }

}

/// Type alias for Result with AppError
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_error_new() {
        let err = AppError::new(ErrorCode::CategoryNotFound);
        assert_eq!(err.code, ErrorCode::CategoryNotFound);
        assert_eq!(err.message, "Category not found");
        assert!(err.details.is_none());
    }

    #[test]
    fn test_app_error_with_detail() {
        let err = AppError::validation("Price must be >= 0")
            .with_detail("field", "price")
            .with_detail("value", -1);

        assert_eq!(err.code, ErrorCode::ValidationFailed);
        let details = err.details.unwrap();
        assert_eq!(details.get("field").unwrap(), "price");
        assert_eq!(details.get("value").unwrap(), -1);
    }

    #[test]
    fn test_app_error_convenience_constructors() {
        let err = AppError::category_not_found("3-1");
        assert_eq!(err.code, ErrorCode::CategoryNotFound);
        assert_eq!(err.message, "Category 3-1 not found");
        assert!(err.details.as_ref().unwrap().contains_key("id"));

        let err = AppError::product_not_found("p-1");
        assert_eq!(err.code, ErrorCode::ProductNotFound);
        assert_eq!(err.message, "Product p-1 not found");

        let err = AppError::nothing_selected();
        assert_eq!(err.code, ErrorCode::NothingSelected);

        let err = AppError::confirmation_pending();
        assert_eq!(err.message, "Another confirmation is pending");

        let err = AppError::invalid_request("No delete is pending");
        assert_eq!(err.code, ErrorCode::InvalidRequest);
    }

    #[test]
    fn test_app_error_display() {
        let err = AppError::with_message(ErrorCode::ProductNotFound, "Entry not found");
        assert_eq!(format!("{}", err), "Entry not found");
    }
}
