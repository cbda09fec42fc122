//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `delay` - Processing delay (tokio timer, no-op)
//! - `random` - Random sources for the advisor fallback (thread, seeded)
//! - `http` - Axum REST API

pub mod delay;
pub mod http;
pub mod random;

pub use delay::{NoDelay, TokioDelay};
pub use random::{SeededRandomSource, ThreadRandomSource};
