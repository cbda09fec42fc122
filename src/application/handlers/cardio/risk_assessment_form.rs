//! RiskAssessmentForm - State owned by the assessment page.
//!
//! Holds the raw field values, the most recent assessment and the loading
//! flag. Each submission produces a fresh assessment that replaces the
//! previous one.

use crate::domain::cardio::{RiskAssessment, VitalsField, VitalsForm};

use super::assess_risk::{AssessRiskCommand, AssessRiskError, AssessRiskHandler};

#[derive(Debug, Clone, Default)]
pub struct RiskAssessmentForm {
    form: VitalsForm,
    assessment: Option<RiskAssessment>,
    loading: bool,
}

impl RiskAssessmentForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn form(&self) -> &VitalsForm {
        &self.form
    }

    pub fn assessment(&self) -> Option<&RiskAssessment> {
        self.assessment.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn set_field(&mut self, field: VitalsField, value: impl Into<String>) {
        self.form.set(field, value);
    }

    /// Submits the current fields.
    ///
    /// On a validation error the previous assessment, if any, is kept.
    pub async fn submit(
        &mut self,
        handler: &AssessRiskHandler,
    ) -> Result<&RiskAssessment, AssessRiskError> {
        self.loading = true;
        let result = handler
            .handle(AssessRiskCommand {
                form: self.form.clone(),
            })
            .await;
        self.loading = false;

        let stored: &RiskAssessment = self.assessment.insert(result?);
        Ok(stored)
    }

    /// Discards the assessment and clears every field.
    pub fn reset(&mut self) {
        self.form.clear();
        self.assessment = None;
        self.loading = false;
    }
}
