//! Processing-delay simulation configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Longest accepted simulated delay.
const MAX_DELAY_MS: u64 = 60_000;

/// Cosmetic "AI is thinking" delays
#[derive(Debug, Clone, Deserialize)]
pub struct SimulationConfig {
    /// When false, results are returned immediately
    #[serde(default = "default_enabled")]
    pub enabled: bool,

    /// Delay before a chatbot reply, in milliseconds
    #[serde(default = "default_chat_delay")]
    pub chat_delay_ms: u64,

    /// Delay before a risk assessment, in milliseconds
    #[serde(default = "default_assessment_delay")]
    pub assessment_delay_ms: u64,
}

impl SimulationConfig {
    /// Chat delay, zero when simulation is disabled
    pub fn chat_delay(&self) -> Duration {
        self.effective(self.chat_delay_ms)
    }

    /// Assessment delay, zero when simulation is disabled
    pub fn assessment_delay(&self) -> Duration {
        self.effective(self.assessment_delay_ms)
    }

    /// Longer of the two effective delays
    pub fn longest_delay(&self) -> Duration {
        self.chat_delay().max(self.assessment_delay())
    }

    fn effective(&self, millis: u64) -> Duration {
        if self.enabled {
            Duration::from_millis(millis)
        } else {
            Duration::ZERO
        }
    }

    /// Validate simulation configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.chat_delay_ms > MAX_DELAY_MS || self.assessment_delay_ms > MAX_DELAY_MS {
            return Err(ValidationError::DelayTooLong(MAX_DELAY_MS));
        }
        Ok(())
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            chat_delay_ms: default_chat_delay(),
            assessment_delay_ms: default_assessment_delay(),
        }
    }
}

fn default_enabled() -> bool {
    true
}

fn default_chat_delay() -> u64 {
    1500
}

fn default_assessment_delay() -> u64 {
    2000
}
