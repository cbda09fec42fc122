//! Shared state handed to every HTTP handler.

use std::sync::Arc;

use crate::application::handlers::{AskAdvisorHandler, AssessRiskHandler};

/// Handlers wired once at startup and shared across requests.
#[derive(Clone)]
pub struct AppState {
    pub advisor: Arc<AskAdvisorHandler>,
    pub cardio: Arc<AssessRiskHandler>,
}

impl AppState {
    pub fn new(advisor: AskAdvisorHandler, cardio: AssessRiskHandler) -> Self {
        Self {
            advisor: Arc::new(advisor),
            cardio: Arc::new(cardio),
        }
    }
}
