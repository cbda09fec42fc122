//! HTTP routes for cardiovascular assessment endpoints.

use axum::{routing::post, Router};

use crate::adapters::http::AppState;

use super::handlers::assess;

/// Creates the cardio router, mounted at `/api/cardio`.
pub fn cardio_routes() -> Router<AppState> {
    Router::new().route("/assess", post(assess))
}
