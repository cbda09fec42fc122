//! Risk Scorer - Additive weighted rules over a vitals record.

use super::assessment::RiskAssessment;
use super::factors::RiskFactor;
use super::vitals::PatientVitals;

/// Scores coronary artery disease risk from a vitals record.
///
/// Pure and stateless: the same record always yields the same assessment.
#[derive(Debug, Clone, Copy, Default)]
pub struct RiskScorer;

impl RiskScorer {
    pub fn new() -> Self {
        Self
    }

    /// Evaluates every rule in table order and sums the weights of those
    /// that fire. The score is clamped to 100 before tiering.
    ///
    /// No range checks are made; out-of-range values simply fail or pass
    /// the comparisons like any other number.
    pub fn score(&self, vitals: &PatientVitals) -> RiskAssessment {
        let factors = RiskFactor::ALL
            .iter()
            .copied()
            .filter(|factor| factor.applies_to(vitals))
            .collect();

        RiskAssessment::from_factors(factors)
    }
}
