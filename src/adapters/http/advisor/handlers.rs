//! HTTP handlers for advisor endpoints.

use axum::{extract::State, Json};

use crate::adapters::http::AppState;
use crate::application::handlers::AskAdvisorCommand;

use super::dto::{GreetingResponse, RespondRequest, RespondResponse};

/// POST /api/advisor/respond - Answer a chat message
pub async fn respond(
    State(state): State<AppState>,
    Json(req): Json<RespondRequest>,
) -> Json<RespondResponse> {
    let reply = state
        .advisor
        .handle(AskAdvisorCommand::new(req.message))
        .await;
    Json(reply.into())
}

/// GET /api/advisor/greeting - Opening chat message
pub async fn greeting(State(state): State<AppState>) -> Json<GreetingResponse> {
    Json(GreetingResponse {
        greeting: state.advisor.greeting().to_string(),
    })
}
