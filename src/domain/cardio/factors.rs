//! Risk factors - The additive rule table behind the CAD risk score.

use serde::{Serialize, Serializer};
use std::fmt;

use super::vitals::{DiabetesStatus, Gender, PatientVitals, SmokingStatus};

/// A triggered scoring rule.
///
/// Variants are declared in evaluation order; `RiskFactor::ALL` and the
/// derived `Ord` both follow that order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RiskFactor {
    AdvancedAge,
    ModerateAge,
    Hypertension,
    ElevatedBloodPressure,
    HighCholesterol,
    BorderlineCholesterol,
    ElevatedHeartRate,
    CurrentSmoker,
    FormerSmoker,
    Diabetes,
    MaleGender,
}

impl RiskFactor {
    /// Every factor in evaluation order.
    pub const ALL: [RiskFactor; 11] = [
        RiskFactor::AdvancedAge,
        RiskFactor::ModerateAge,
        RiskFactor::Hypertension,
        RiskFactor::ElevatedBloodPressure,
        RiskFactor::HighCholesterol,
        RiskFactor::BorderlineCholesterol,
        RiskFactor::ElevatedHeartRate,
        RiskFactor::CurrentSmoker,
        RiskFactor::FormerSmoker,
        RiskFactor::Diabetes,
        RiskFactor::MaleGender,
    ];

    /// Points added to the raw score when this factor fires.
    pub fn weight(&self) -> u32 {
        match self {
            RiskFactor::AdvancedAge => 25,
            RiskFactor::ModerateAge => 15,
            RiskFactor::Hypertension => 20,
            RiskFactor::ElevatedBloodPressure => 10,
            RiskFactor::HighCholesterol => 20,
            RiskFactor::BorderlineCholesterol => 10,
            RiskFactor::ElevatedHeartRate => 10,
            RiskFactor::CurrentSmoker => 25,
            RiskFactor::FormerSmoker => 10,
            RiskFactor::Diabetes => 20,
            RiskFactor::MaleGender => 10,
        }
    }

    /// Human-readable text shown in the assessment.
    pub fn description(&self) -> &'static str {
        match self {
            RiskFactor::AdvancedAge => "Advanced age (>65 years)",
            RiskFactor::ModerateAge => "Moderate age risk (45-65 years)",
            RiskFactor::Hypertension => "Hypertension (BP >140/90)",
            RiskFactor::ElevatedBloodPressure => "Elevated blood pressure",
            RiskFactor::HighCholesterol => "High cholesterol (>240 mg/dL)",
            RiskFactor::BorderlineCholesterol => "Borderline high cholesterol",
            RiskFactor::ElevatedHeartRate => "Elevated resting heart rate",
            RiskFactor::CurrentSmoker => "Current smoking",
            RiskFactor::FormerSmoker => "Former smoking history",
            RiskFactor::Diabetes => "Diabetes mellitus",
            RiskFactor::MaleGender => "Male gender",
        }
    }

    /// The factor's predicate over a vitals record.
    ///
    /// Lower tiers of a bracket exclude the higher tier, so at most one
    /// factor per bracket holds for any record. All comparisons are strict.
    pub fn applies_to(&self, v: &PatientVitals) -> bool {
        match self {
            RiskFactor::AdvancedAge => v.age > 65,
            RiskFactor::ModerateAge => v.age > 45 && v.age <= 65,
            RiskFactor::Hypertension => v.systolic_bp > 140,
            RiskFactor::ElevatedBloodPressure => v.systolic_bp > 120 && v.systolic_bp <= 140,
            RiskFactor::HighCholesterol => v.cholesterol > 240,
            RiskFactor::BorderlineCholesterol => v.cholesterol > 200 && v.cholesterol <= 240,
            RiskFactor::ElevatedHeartRate => v.heart_rate > 100,
            RiskFactor::CurrentSmoker => v.smoking_status == SmokingStatus::Current,
            RiskFactor::FormerSmoker => v.smoking_status == SmokingStatus::Former,
            RiskFactor::Diabetes => v.diabetes_status == DiabetesStatus::Yes,
            RiskFactor::MaleGender => v.gender == Gender::Male,
        }
    }
}

impl fmt::Display for RiskFactor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

impl Serialize for RiskFactor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.description())
    }
}
