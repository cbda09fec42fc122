//! Risk assessment result and tiering.

use serde::Serialize;
use std::fmt;

use crate::domain::foundation::Percentage;

use super::factors::RiskFactor;

/// Clamped score at or above which the risk is High.
pub const HIGH_RISK_THRESHOLD: Percentage = Percentage::new(60);

/// Clamped score at or above which the risk is at least Moderate.
pub const MODERATE_RISK_THRESHOLD: Percentage = Percentage::new(30);

/// Confidence shown with every assessment.
///
/// A fixed presentation value, not derived from the input.
pub const CONFIDENCE_SCORE: Percentage = Percentage::new(87);

/// Discretized risk tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum RiskLevel {
    Low,
    Moderate,
    High,
}

impl RiskLevel {
    /// Tier for a clamped score.
    pub fn from_score(score: Percentage) -> Self {
        if score.reaches(HIGH_RISK_THRESHOLD) {
            RiskLevel::High
        } else if score.reaches(MODERATE_RISK_THRESHOLD) {
            RiskLevel::Moderate
        } else {
            RiskLevel::Low
        }
    }

    /// Returns the display label for this tier.
    pub fn label(&self) -> &'static str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::Moderate => "Moderate",
            RiskLevel::High => "High",
        }
    }

    /// Recommendations for this tier. Chosen wholesale by tier, not by
    /// which factors fired.
    pub fn recommendations(&self) -> &'static [&'static str] {
        match self {
            RiskLevel::High => &[
                "Immediate cardiology consultation recommended",
                "Consider cardiac stress testing",
                "Aggressive lifestyle modifications",
                "Possible medication therapy",
                "Regular monitoring required",
            ],
            RiskLevel::Moderate => &[
                "Lifestyle modifications recommended",
                "Regular cardiovascular screening",
                "Blood pressure monitoring",
                "Cholesterol management",
                "Consider preventive medications",
            ],
            RiskLevel::Low => &[
                "Maintain healthy lifestyle",
                "Regular exercise",
                "Balanced diet",
            ],
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Outcome of scoring one vitals record. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskAssessment {
    risk_score: Percentage,
    #[serde(skip)]
    raw_score: u32,
    risk_level: RiskLevel,
    risk_factors: Vec<RiskFactor>,
    recommendations: Vec<String>,
    confidence_score: Percentage,
}

impl RiskAssessment {
    /// Builds an assessment from the factors that fired, in firing order.
    pub(crate) fn from_factors(risk_factors: Vec<RiskFactor>) -> Self {
        let raw_score: u32 = risk_factors.iter().map(RiskFactor::weight).sum();
        let risk_score = Percentage::saturating_from(raw_score);
        let risk_level = RiskLevel::from_score(risk_score);

        Self {
            risk_score,
            raw_score,
            risk_level,
            risk_factors,
            recommendations: risk_level
                .recommendations()
                .iter()
                .map(|r| r.to_string())
                .collect(),
            confidence_score: CONFIDENCE_SCORE,
        }
    }

    pub fn risk_score(&self) -> Percentage {
        self.risk_score
    }

    /// Sum of triggered weights before clamping.
    pub fn raw_score(&self) -> u32 {
        self.raw_score
    }

    pub fn risk_level(&self) -> RiskLevel {
        self.risk_level
    }

    pub fn risk_factors(&self) -> &[RiskFactor] {
        &self.risk_factors
    }

    /// Factor descriptions in evaluation order.
    pub fn factor_descriptions(&self) -> Vec<&'static str> {
        self.risk_factors.iter().map(RiskFactor::description).collect()
    }

    pub fn recommendations(&self) -> &[String] {
        &self.recommendations
    }

    pub fn confidence_score(&self) -> Percentage {
        self.confidence_score
    }

    /// One-line completion notice, e.g. `Risk level: High (100% risk score)`.
    pub fn summary(&self) -> String {
        format!(
            "Risk level: {} ({} risk score)",
            self.risk_level, self.risk_score
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tier_thresholds_are_inclusive_lower_bounds() {
        assert_eq!(RiskLevel::from_score(Percentage::new(0)), RiskLevel::Low);
        assert_eq!(RiskLevel::from_score(Percentage::new(29)), RiskLevel::Low);
        assert_eq!(RiskLevel::from_score(Percentage::new(30)), RiskLevel::Moderate);
        assert_eq!(RiskLevel::from_score(Percentage::new(59)), RiskLevel::Moderate);
        assert_eq!(RiskLevel::from_score(Percentage::new(60)), RiskLevel::High);
        assert_eq!(RiskLevel::from_score(Percentage::new(100)), RiskLevel::High);
    }

    #[test]
    fn recommendation_list_sizes_per_tier() {
        assert_eq!(RiskLevel::High.recommendations().len(), 5);
        assert_eq!(RiskLevel::Moderate.recommendations().len(), 5);
        assert_eq!(RiskLevel::Low.recommendations().len(), 3);
    }

    #[test]
    fn from_factors_clamps_and_keeps_raw_sum() {
        let assessment = RiskAssessment::from_factors(vec![
            RiskFactor::AdvancedAge,
            RiskFactor::Hypertension,
            RiskFactor::HighCholesterol,
            RiskFactor::ElevatedHeartRate,
            RiskFactor::CurrentSmoker,
            RiskFactor::Diabetes,
            RiskFactor::MaleGender,
        ]);
        assert_eq!(assessment.raw_score(), 130);
        assert_eq!(assessment.risk_score(), Percentage::HUNDRED);
        assert_eq!(assessment.risk_level(), RiskLevel::High);
    }

    #[test]
    fn empty_factors_is_low_risk() {
        let assessment = RiskAssessment::from_factors(vec![]);
        assert_eq!(assessment.risk_score(), Percentage::ZERO);
        assert_eq!(assessment.risk_level(), RiskLevel::Low);
        assert_eq!(
            assessment.recommendations(),
            &["Maintain healthy lifestyle", "Regular exercise", "Balanced diet"]
        );
    }

    #[test]
    fn confidence_is_constant() {
        assert_eq!(RiskAssessment::from_factors(vec![]).confidence_score().value(), 87);
        assert_eq!(
            RiskAssessment::from_factors(vec![RiskFactor::Diabetes])
                .confidence_score()
                .value(),
            87
        );
    }

    #[test]
    fn summary_matches_completion_notice() {
        let assessment =
            RiskAssessment::from_factors(vec![RiskFactor::ModerateAge, RiskFactor::MaleGender]);
        assert_eq!(assessment.summary(), "Risk level: Low (25% risk score)");
    }

    #[test]
    fn serializes_with_client_field_names() {
        let assessment = RiskAssessment::from_factors(vec![RiskFactor::Diabetes]);
        let json = serde_json::to_value(&assessment).unwrap();
        assert_eq!(json["riskScore"], 20);
        assert_eq!(json["riskLevel"], "Low");
        assert_eq!(json["riskFactors"][0], "Diabetes mellitus");
        assert_eq!(json["confidenceScore"], 87);
        assert!(json.get("rawScore").is_none());
    }
}
