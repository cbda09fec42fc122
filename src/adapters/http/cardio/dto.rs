//! HTTP DTOs for cardiovascular assessment endpoints.
//!
//! Form values arrive either as JSON strings (what an HTML form posts) or
//! as JSON numbers. Both are kept as text and validated by the domain, so a
//! non-integer number is rejected there rather than truncated here.

use serde::{de, Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::domain::cardio::{RiskAssessment, RiskLevel, VitalsForm};

/// Submitted vitals form.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessRequest {
    #[serde(default, deserialize_with = "string_or_number")]
    pub age: String,
    #[serde(default, rename = "systolicBP", deserialize_with = "string_or_number")]
    pub systolic_bp: String,
    #[serde(default, rename = "diastolicBP", deserialize_with = "string_or_number")]
    pub diastolic_bp: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub cholesterol: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub heart_rate: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub gender: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub smoking_status: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub diabetes_status: String,
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(String::new()),
        Some(Value::String(s)) => Ok(s),
        Some(Value::Number(n)) => Ok(n.to_string()),
        Some(other) => Err(de::Error::custom(format!(
            "expected a string or number, got {}",
            other
        ))),
    }
}

impl From<AssessRequest> for VitalsForm {
    fn from(req: AssessRequest) -> Self {
        Self {
            age: req.age,
            systolic_bp: req.systolic_bp,
            diastolic_bp: req.diastolic_bp,
            cholesterol: req.cholesterol,
            heart_rate: req.heart_rate,
            gender: req.gender,
            smoking_status: req.smoking_status,
            diabetes_status: req.diabetes_status,
        }
    }
}

/// Assessment as rendered by the result page.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessResponse {
    pub risk_score: u8,
    pub risk_level: RiskLevel,
    pub risk_factors: Vec<String>,
    pub recommendations: Vec<String>,
    pub confidence_score: u8,
    pub summary: String,
}

impl From<RiskAssessment> for AssessResponse {
    fn from(assessment: RiskAssessment) -> Self {
        Self {
            risk_score: assessment.risk_score().value(),
            risk_level: assessment.risk_level(),
            risk_factors: assessment
                .factor_descriptions()
                .into_iter()
                .map(String::from)
                .collect(),
            recommendations: assessment.recommendations().to_vec(),
            confidence_score: assessment.confidence_score().value(),
            summary: assessment.summary(),
        }
    }
}
