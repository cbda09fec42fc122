//! HTTP adapters - REST API implementations.
//!
//! Each domain module has its own HTTP adapter for endpoint exposure.
//! The API is stateless: every request is answered from its own body.

pub mod advisor;
pub mod cardio;
mod error;
mod health;
mod router;
mod state;

pub use error::ErrorResponse;
pub use health::HealthResponse;
pub use router::api_router;
pub use state::AppState;
