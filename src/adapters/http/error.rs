//! Error body shared by every endpoint.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::json;

use crate::domain::foundation::ValidationError;

/// Standard error response.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    /// 400 body naming the rejected field.
    pub fn validation(error: &ValidationError) -> Self {
        Self {
            code: error.code().to_string(),
            message: error.to_string(),
            details: Some(json!({ "field": error.field() })),
        }
    }

    pub fn into_response_with(self, status: StatusCode) -> Response {
        (status, Json(self)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_body_carries_code_and_field() {
        let body = ErrorResponse::validation(&ValidationError::missing_field("age"));
        assert_eq!(body.code, "MISSING_FIELD");
        assert_eq!(body.message, "Field 'age' is required");
        assert_eq!(body.details, Some(json!({ "field": "age" })));
    }

    #[test]
    fn serialized_body_uses_screaming_code() {
        let body = ErrorResponse::validation(&ValidationError::invalid_number("age", "x"));
        let json = serde_json::to_value(body).unwrap();
        assert_eq!(json["code"], "INVALID_NUMBER");
        assert_eq!(json["details"]["field"], "age");
    }
}
