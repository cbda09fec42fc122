//! Top-level router assembly.

use axum::http::{header, HeaderValue, Method};
use axum::Router;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;

use super::advisor::advisor_routes;
use super::cardio::cardio_routes;
use super::health::health_routes;
use super::state::AppState;

/// Builds the full API with tracing, CORS and request timeout layers.
///
/// # Routes
/// - `GET /health`
/// - `GET /api/advisor/greeting`
/// - `POST /api/advisor/respond`
/// - `POST /api/cardio/assess`
pub fn api_router(state: AppState, server: &ServerConfig) -> Router {
    Router::new()
        .merge(health_routes())
        .nest("/api/advisor", advisor_routes())
        .nest("/api/cardio", cardio_routes())
        .with_state(state)
        .layer(TimeoutLayer::new(server.request_timeout()))
        .layer(cors_layer(&server.origins()))
        .layer(TraceLayer::new_for_http())
}

/// Any origin when none are configured, otherwise exactly the listed ones.
fn cors_layer(origins: &[&str]) -> CorsLayer {
    let base = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE]);

    if origins.is_empty() {
        return base.allow_origin(Any);
    }

    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    base.allow_origin(AllowOrigin::list(allowed))
}
