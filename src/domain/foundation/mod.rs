//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers and error types shared by the
//! advisor and cardiovascular modules.

mod errors;
mod ids;
mod percentage;
mod timestamp;

pub use errors::{ErrorCode, ValidationError};
pub use ids::MessageId;
pub use percentage::Percentage;
pub use timestamp::Timestamp;
