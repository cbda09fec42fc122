//! Cardio handlers - Risk assessment command and the assessment page shell.

mod assess_risk;
mod risk_assessment_form;

pub use assess_risk::{AssessRiskCommand, AssessRiskError, AssessRiskHandler};
pub use risk_assessment_form::RiskAssessmentForm;
