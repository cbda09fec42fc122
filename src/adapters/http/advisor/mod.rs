//! HTTP adapter for advisor (chatbot) endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{GreetingResponse, RespondRequest, RespondResponse};
pub use routes::advisor_routes;
