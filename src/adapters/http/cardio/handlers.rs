//! HTTP handlers for cardiovascular assessment endpoints.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::{AppState, ErrorResponse};
use crate::application::handlers::{AssessRiskCommand, AssessRiskError};

use super::dto::{AssessRequest, AssessResponse};

/// POST /api/cardio/assess - Score a submitted vitals form
pub async fn assess(State(state): State<AppState>, Json(req): Json<AssessRequest>) -> Response {
    let cmd = AssessRiskCommand { form: req.into() };

    match state.cardio.handle(cmd).await {
        Ok(assessment) => {
            let response: AssessResponse = assessment.into();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_assess_error(e),
    }
}

fn handle_assess_error(error: AssessRiskError) -> Response {
    match error {
        AssessRiskError::Validation(e) => {
            ErrorResponse::validation(&e).into_response_with(StatusCode::BAD_REQUEST)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::ValidationError;

    #[test]
    fn validation_error_maps_to_400() {
        let error = AssessRiskError::Validation(ValidationError::missing_field("age"));
        let response = handle_assess_error(error);
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
