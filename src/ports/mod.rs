//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `RandomSource` - Uniform index selection for the advisor fallback pool
//! - `ProcessingDelay` - Cosmetic latency applied by the presentation shells

mod processing_delay;
mod random_source;

pub use processing_delay::ProcessingDelay;
pub use random_source::{FixedIndex, RandomSource};
