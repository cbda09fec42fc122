//! HTTP routes for advisor endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use crate::adapters::http::AppState;

use super::handlers::{greeting, respond};

/// Creates the advisor router, mounted at `/api/advisor`.
pub fn advisor_routes() -> Router<AppState> {
    Router::new()
        .route("/respond", post(respond))
        .route("/greeting", get(greeting))
}
