//! HTTP adapter for cardiovascular assessment endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{AssessRequest, AssessResponse};
pub use routes::cardio_routes;
