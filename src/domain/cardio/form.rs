//! Vitals form - Raw field values and their conversion into `PatientVitals`.
//!
//! The form keeps whatever the user typed. Nothing is coerced: a blank or
//! non-numeric field is rejected with the field's name instead of silently
//! scoring as zero.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::IntErrorKind;
use std::ops::RangeInclusive;

use crate::domain::foundation::ValidationError;

use super::vitals::{DiabetesStatus, Gender, PatientVitals, SmokingStatus};

/// A field of the vitals form, in form order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum VitalsField {
    Age,
    #[serde(rename = "systolicBP")]
    SystolicBp,
    #[serde(rename = "diastolicBP")]
    DiastolicBp,
    Cholesterol,
    HeartRate,
    Gender,
    SmokingStatus,
    DiabetesStatus,
}

impl VitalsField {
    /// Every field in form order.
    pub const ALL: [VitalsField; 8] = [
        VitalsField::Age,
        VitalsField::SystolicBp,
        VitalsField::DiastolicBp,
        VitalsField::Cholesterol,
        VitalsField::HeartRate,
        VitalsField::Gender,
        VitalsField::SmokingStatus,
        VitalsField::DiabetesStatus,
    ];

    /// Wire name, as used in form submissions and error details.
    pub fn name(&self) -> &'static str {
        match self {
            VitalsField::Age => "age",
            VitalsField::SystolicBp => "systolicBP",
            VitalsField::DiastolicBp => "diastolicBP",
            VitalsField::Cholesterol => "cholesterol",
            VitalsField::HeartRate => "heartRate",
            VitalsField::Gender => "gender",
            VitalsField::SmokingStatus => "smokingStatus",
            VitalsField::DiabetesStatus => "diabetesStatus",
        }
    }

    /// Suggested input range shown next to numeric fields.
    ///
    /// Display hints only; validation never enforces them.
    pub fn display_hint(&self) -> Option<RangeInclusive<i32>> {
        match self {
            VitalsField::Age => Some(1..=120),
            VitalsField::SystolicBp => Some(70..=250),
            VitalsField::DiastolicBp => Some(40..=150),
            VitalsField::Cholesterol => Some(100..=400),
            VitalsField::HeartRate => Some(40..=200),
            VitalsField::Gender | VitalsField::SmokingStatus | VitalsField::DiabetesStatus => None,
        }
    }
}

impl fmt::Display for VitalsField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Raw, unvalidated form contents.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VitalsForm {
    pub age: String,
    #[serde(rename = "systolicBP")]
    pub systolic_bp: String,
    #[serde(rename = "diastolicBP")]
    pub diastolic_bp: String,
    pub cholesterol: String,
    pub heart_rate: String,
    pub gender: String,
    pub smoking_status: String,
    pub diabetes_status: String,
}

impl VitalsForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: VitalsField) -> &str {
        match field {
            VitalsField::Age => &self.age,
            VitalsField::SystolicBp => &self.systolic_bp,
            VitalsField::DiastolicBp => &self.diastolic_bp,
            VitalsField::Cholesterol => &self.cholesterol,
            VitalsField::HeartRate => &self.heart_rate,
            VitalsField::Gender => &self.gender,
            VitalsField::SmokingStatus => &self.smoking_status,
            VitalsField::DiabetesStatus => &self.diabetes_status,
        }
    }

    pub fn set(&mut self, field: VitalsField, value: impl Into<String>) {
        let slot = match field {
            VitalsField::Age => &mut self.age,
            VitalsField::SystolicBp => &mut self.systolic_bp,
            VitalsField::DiastolicBp => &mut self.diastolic_bp,
            VitalsField::Cholesterol => &mut self.cholesterol,
            VitalsField::HeartRate => &mut self.heart_rate,
            VitalsField::Gender => &mut self.gender,
            VitalsField::SmokingStatus => &mut self.smoking_status,
            VitalsField::DiabetesStatus => &mut self.diabetes_status,
        };
        *slot = value.into();
    }

    /// Clears every field.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// True when every field is blank.
    pub fn is_blank(&self) -> bool {
        VitalsField::ALL
            .iter()
            .all(|field| self.get(*field).trim().is_empty())
    }

    /// Converts the form into a scorable record.
    ///
    /// Fields are checked in form order; the first failure is returned.
    ///
    /// # Errors
    ///
    /// - `MissingField` for a blank field
    /// - `InvalidNumber` when a numeric field is not a base-10 integer
    /// - `UnknownOption` when a choice field has an unrecognized value
    pub fn validate(&self) -> Result<PatientVitals, ValidationError> {
        Ok(PatientVitals {
            age: self.integer(VitalsField::Age)?,
            systolic_bp: self.integer(VitalsField::SystolicBp)?,
            diastolic_bp: self.integer(VitalsField::DiastolicBp)?,
            cholesterol: self.integer(VitalsField::Cholesterol)?,
            heart_rate: self.integer(VitalsField::HeartRate)?,
            gender: self.choice::<Gender>(VitalsField::Gender)?,
            smoking_status: self.choice::<SmokingStatus>(VitalsField::SmokingStatus)?,
            diabetes_status: self.choice::<DiabetesStatus>(VitalsField::DiabetesStatus)?,
        })
    }

    fn required(&self, field: VitalsField) -> Result<&str, ValidationError> {
        let value = self.get(field).trim();
        if value.is_empty() {
            return Err(ValidationError::missing_field(field.name()));
        }
        Ok(value)
    }

    /// Whole numbers beyond `i32` saturate; every threshold sits well
    /// inside the range, so the same factors fire.
    fn integer(&self, field: VitalsField) -> Result<i32, ValidationError> {
        let value = self.required(field)?;
        match value.parse::<i32>() {
            Ok(n) => Ok(n),
            Err(e) => match e.kind() {
                IntErrorKind::PosOverflow => Ok(i32::MAX),
                IntErrorKind::NegOverflow => Ok(i32::MIN),
                _ => Err(ValidationError::invalid_number(field.name(), value)),
            },
        }
    }

    fn choice<T>(&self, field: VitalsField) -> Result<T, ValidationError>
    where
        T: std::str::FromStr<Err = ValidationError>,
    {
        self.required(field)?.parse()
    }
}
