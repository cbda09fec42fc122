//! Processing delay port - Simulated "AI is thinking" latency.
//!
//! The advisor and the risk assessment wait a fixed time before showing a
//! result. The wait is cosmetic and carries no correctness requirement.
//! Production wiring sleeps; tests use an adapter that returns immediately.

use async_trait::async_trait;
use std::time::Duration;

/// Port for the cosmetic pause applied before a result is shown.
#[async_trait]
pub trait ProcessingDelay: Send + Sync {
    /// Waits before the caller publishes its result.
    async fn pause(&self);

    /// Configured wait, for logging.
    fn duration(&self) -> Duration;
}
