//! AssessRiskHandler - Validates a vitals form and scores it.

use std::sync::Arc;

use thiserror::Error;

use crate::domain::cardio::{RiskAssessment, RiskScorer, VitalsForm};
use crate::domain::foundation::ValidationError;
use crate::ports::ProcessingDelay;

/// Command to assess one submitted form.
#[derive(Debug, Clone)]
pub struct AssessRiskCommand {
    pub form: VitalsForm,
}

/// Errors that prevent an assessment from being produced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AssessRiskError {
    #[error("Invalid vitals: {0}")]
    Validation(#[from] ValidationError),
}

/// Handler for risk assessments.
pub struct AssessRiskHandler {
    scorer: RiskScorer,
    delay: Arc<dyn ProcessingDelay>,
}

impl AssessRiskHandler {
    pub fn new(scorer: RiskScorer, delay: Arc<dyn ProcessingDelay>) -> Self {
        Self { scorer, delay }
    }

    /// Validates first so a bad form fails without waiting out the pause.
    pub async fn handle(&self, cmd: AssessRiskCommand) -> Result<RiskAssessment, AssessRiskError> {
        let vitals = cmd.form.validate().map_err(|e| {
            tracing::debug!(field = e.field(), error = %e, "Rejected vitals form");
            e
        })?;

        tracing::trace!(delay = ?self.delay.duration(), "Assessing vitals");
        self.delay.pause().await;

        let assessment = self.scorer.score(&vitals);
        tracing::info!(
            risk_score = assessment.risk_score().value(),
            risk_level = assessment.risk_level().label(),
            factors = assessment.risk_factors().len(),
            "CAD risk assessment complete"
        );
        Ok(assessment)
    }
}
