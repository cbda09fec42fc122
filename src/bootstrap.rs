//! Wiring of adapters into handlers from configuration.

use std::sync::Arc;

use crate::adapters::http::AppState;
use crate::adapters::{SeededRandomSource, ThreadRandomSource, TokioDelay};
use crate::application::handlers::{AskAdvisorHandler, AssessRiskHandler};
use crate::config::AppConfig;
use crate::domain::advisor::KeywordResponder;
use crate::domain::cardio::RiskScorer;
use crate::ports::RandomSource;

/// Builds the shared HTTP state for a configuration.
pub fn build_state(config: &AppConfig) -> AppState {
    let random: Arc<dyn RandomSource> = match config.advisor.random_seed {
        Some(seed) => {
            tracing::info!(seed, "Advisor fallback uses a seeded random source");
            Arc::new(SeededRandomSource::new(seed))
        }
        None => Arc::new(ThreadRandomSource),
    };

    let chat_delay = TokioDelay::new(config.simulation.chat_delay());
    let assessment_delay = TokioDelay::new(config.simulation.assessment_delay());
    tracing::debug!(
        enabled = config.simulation.enabled,
        chat_delay_ms = config.simulation.chat_delay_ms,
        assessment_delay_ms = config.simulation.assessment_delay_ms,
        "Simulated processing delays configured"
    );

    AppState::new(
        AskAdvisorHandler::new(KeywordResponder::new(random), Arc::new(chat_delay)),
        AssessRiskHandler::new(RiskScorer::new(), Arc::new(assessment_delay)),
    )
}
