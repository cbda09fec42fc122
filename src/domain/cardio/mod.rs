//! Cardio Module - Rule-based coronary artery disease risk assessment.
//!
//! # Components
//!
//! - `PatientVitals` - Fully populated input record
//! - `VitalsForm` - Raw form fields and their validation into `PatientVitals`
//! - `RiskFactor` - The eleven weighted rules, in evaluation order
//! - `RiskScorer` - Sums triggered weights, clamps to 100, tiers the result
//! - `RiskAssessment` - Immutable scoring outcome
//!
//! # Design Philosophy
//!
//! Scoring is pure and total over `PatientVitals`. Input problems are caught
//! earlier, when the form is validated, so the scorer never guards its input.

mod assessment;
mod factors;
mod form;
mod scorer;
mod vitals;

pub use assessment::{
    RiskAssessment, RiskLevel, CONFIDENCE_SCORE, HIGH_RISK_THRESHOLD, MODERATE_RISK_THRESHOLD,
};
pub use factors::RiskFactor;
pub use form::{VitalsField, VitalsForm};
pub use scorer::RiskScorer;
pub use vitals::{DiabetesStatus, Gender, PatientVitals, SmokingStatus};
