//! Processing delay adapters.
//!
//! - `TokioDelay` - sleeps on the tokio timer, used by the running service
//! - `NoDelay` - returns immediately, used in tests and when simulation is off

use async_trait::async_trait;
use std::time::Duration;
use tokio::time::sleep;

use crate::ports::ProcessingDelay;

/// Sleeps for a fixed duration.
#[derive(Debug, Clone, Copy)]
pub struct TokioDelay {
    duration: Duration,
}

impl TokioDelay {
    pub fn new(duration: Duration) -> Self {
        Self { duration }
    }
}

#[async_trait]
impl ProcessingDelay for TokioDelay {
    async fn pause(&self) {
        if !self.duration.is_zero() {
            sleep(self.duration).await;
        }
    }

    fn duration(&self) -> Duration {
        self.duration
    }
}

/// Returns immediately.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDelay;

#[async_trait]
impl ProcessingDelay for NoDelay {
    async fn pause(&self) {}

    fn duration(&self) -> Duration {
        Duration::ZERO
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    #[tokio::test]
    async fn tokio_delay_waits_at_least_its_duration() {
        let delay = TokioDelay::new(Duration::from_millis(20));
        let started = Instant::now();
        delay.pause().await;
        assert!(started.elapsed() >= Duration::from_millis(20));
        assert_eq!(delay.duration(), Duration::from_millis(20));
    }

    #[tokio::test]
    async fn zero_tokio_delay_returns_immediately() {
        let started = Instant::now();
        TokioDelay::new(Duration::ZERO).pause().await;
        assert!(started.elapsed() < Duration::from_secs(1));
    }

    #[tokio::test]
    async fn no_delay_reports_zero() {
        NoDelay.pause().await;
        assert_eq!(NoDelay.duration(), Duration::ZERO);
    }
}
