//! Patient vitals record and its categorical fields.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// Biological sex as collected by the assessment form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

/// Tobacco use history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SmokingStatus {
    Never,
    Former,
    Current,
}

/// Whether the patient has been diagnosed with diabetes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiabetesStatus {
    No,
    Yes,
}

/// Generates `as_str`, `OPTIONS`, `Display` and `FromStr` for a form enum.
///
/// Parsing is case-insensitive and ignores surrounding whitespace.
macro_rules! form_option {
    ($ty:ident, $field:literal, { $($variant:ident => $text:literal),+ $(,)? }) => {
        impl $ty {
            /// Accepted form values, in display order.
            pub const OPTIONS: &'static [&'static str] = &[$($text),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($ty::$variant => $text),+
                }
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $ty {
            type Err = ValidationError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let lowered = s.trim().to_lowercase();
                match lowered.as_str() {
                    $($text => Ok($ty::$variant),)+
                    _ => Err(ValidationError::unknown_option($field, s.trim(), Self::OPTIONS)),
                }
            }
        }
    };
}

form_option!(Gender, "gender", { Male => "male", Female => "female" });
form_option!(SmokingStatus, "smokingStatus", {
    Never => "never",
    Former => "former",
    Current => "current",
});
form_option!(DiabetesStatus, "diabetesStatus", { No => "no", Yes => "yes" });

/// A fully populated vitals record, ready for scoring.
///
/// Numeric fields are signed and unbounded on purpose: the scorer accepts
/// any value, including ones outside clinical ranges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatientVitals {
    /// Years.
    pub age: i32,
    /// mmHg.
    #[serde(rename = "systolicBP")]
    pub systolic_bp: i32,
    /// mmHg. Collected but not scored.
    #[serde(rename = "diastolicBP")]
    pub diastolic_bp: i32,
    /// Total cholesterol, mg/dL.
    pub cholesterol: i32,
    /// Resting heart rate, bpm.
    pub heart_rate: i32,
    pub gender: Gender,
    pub smoking_status: SmokingStatus,
    pub diabetes_status: DiabetesStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn options_parse_case_insensitively() {
        assert_eq!("Male".parse::<Gender>().unwrap(), Gender::Male);
        assert_eq!(" FEMALE ".parse::<Gender>().unwrap(), Gender::Female);
        assert_eq!("current".parse::<SmokingStatus>().unwrap(), SmokingStatus::Current);
        assert_eq!("Yes".parse::<DiabetesStatus>().unwrap(), DiabetesStatus::Yes);
    }

    #[test]
    fn unknown_option_reports_field_and_choices() {
        let err = "sometimes".parse::<SmokingStatus>().unwrap_err();
        assert_eq!(
            err,
            ValidationError::UnknownOption {
                field: "smokingStatus".to_string(),
                value: "sometimes".to_string(),
                expected: "never, former, current".to_string(),
            }
        );
    }

    #[test]
    fn display_round_trips_through_from_str() {
        for option in SmokingStatus::OPTIONS {
            let parsed: SmokingStatus = option.parse().unwrap();
            assert_eq!(parsed.to_string(), *option);
        }
    }

    #[test]
    fn vitals_use_form_field_names_in_json() {
        let vitals = PatientVitals {
            age: 52,
            systolic_bp: 130,
            diastolic_bp: 85,
            cholesterol: 210,
            heart_rate: 72,
            gender: Gender::Female,
            smoking_status: SmokingStatus::Former,
            diabetes_status: DiabetesStatus::No,
        };
        let json = serde_json::to_value(vitals).unwrap();
        assert_eq!(json["systolicBP"], 130);
        assert_eq!(json["diastolicBP"], 85);
        assert_eq!(json["heartRate"], 72);
        assert_eq!(json["smokingStatus"], "former");
        assert_eq!(json["diabetesStatus"], "no");
    }
}
