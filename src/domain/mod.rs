//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, errors)
//! - `advisor` - Keyword-driven chatbot responses
//! - `cardio` - Cardiovascular risk scoring and vitals validation

pub mod advisor;
pub mod cardio;
pub mod foundation;
