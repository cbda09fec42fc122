//! Error types for the domain layer.

use std::fmt;
use thiserror::Error;

/// Errors raised while turning raw input into domain values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Field '{field}' is required")]
    MissingField { field: String },

    #[error("Field '{field}' must be a whole number, got '{value}'")]
    InvalidNumber { field: String, value: String },

    #[error("Field '{field}' must be one of [{expected}], got '{value}'")]
    UnknownOption {
        field: String,
        value: String,
        expected: String,
    },
}

impl ValidationError {
    /// Creates a missing field validation error.
    pub fn missing_field(field: impl Into<String>) -> Self {
        ValidationError::MissingField {
            field: field.into(),
        }
    }

    /// Creates an invalid number validation error.
    pub fn invalid_number(field: impl Into<String>, value: impl Into<String>) -> Self {
        ValidationError::InvalidNumber {
            field: field.into(),
            value: value.into(),
        }
    }

    /// Creates an unknown option validation error.
    pub fn unknown_option(
        field: impl Into<String>,
        value: impl Into<String>,
        expected: &[&str],
    ) -> Self {
        ValidationError::UnknownOption {
            field: field.into(),
            value: value.into(),
            expected: expected.join(", "),
        }
    }

    /// Name of the offending field.
    pub fn field(&self) -> &str {
        match self {
            ValidationError::MissingField { field }
            | ValidationError::InvalidNumber { field, .. }
            | ValidationError::UnknownOption { field, .. } => field,
        }
    }

    /// Stable machine-readable code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            ValidationError::MissingField { .. } => ErrorCode::MissingField,
            ValidationError::InvalidNumber { .. } => ErrorCode::InvalidNumber,
            ValidationError::UnknownOption { .. } => ErrorCode::UnknownOption,
        }
    }
}

/// Error codes surfaced to API clients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    MissingField,
    InvalidNumber,
    UnknownOption,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::MissingField => "MISSING_FIELD",
            ErrorCode::InvalidNumber => "INVALID_NUMBER",
            ErrorCode::UnknownOption => "UNKNOWN_OPTION",
        };
        write!(f, "{}", s)
    }
}
