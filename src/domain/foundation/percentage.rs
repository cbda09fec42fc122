//! Percentage value object for scores shown on a 0-100 scale.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Whole-number percentage, always within `0..=100`.
///
/// Used for the clamped risk score and the confidence figure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Percentage(u8);

impl Percentage {
    pub const ZERO: Self = Self(0);
    pub const HUNDRED: Self = Self(100);

    /// Clamps into range. `const` so thresholds can be declared as constants.
    pub const fn new(value: u8) -> Self {
        if value > Self::HUNDRED.0 {
            Self::HUNDRED
        } else {
            Self(value)
        }
    }

    /// Clamps an unbounded sum of rule weights.
    pub fn saturating_from(sum: u32) -> Self {
        u8::try_from(sum).map_or(Self::HUNDRED, Self::new)
    }

    pub fn value(&self) -> u8 {
        self.0
    }

    /// True when this value is at or above `threshold`.
    pub fn reaches(&self, threshold: Percentage) -> bool {
        self.0 >= threshold.0
    }
}

impl fmt::Display for Percentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_clamps_above_hundred() {
        assert_eq!(Percentage::new(87).value(), 87);
        assert_eq!(Percentage::new(101), Percentage::HUNDRED);
        assert_eq!(Percentage::new(u8::MAX), Percentage::HUNDRED);
    }

    #[test]
    fn weight_sums_saturate_at_hundred() {
        assert_eq!(Percentage::saturating_from(0), Percentage::ZERO);
        assert_eq!(Percentage::saturating_from(99).value(), 99);
        assert_eq!(Percentage::saturating_from(130), Percentage::HUNDRED);
        assert_eq!(Percentage::saturating_from(256), Percentage::HUNDRED);
        assert_eq!(Percentage::saturating_from(u32::MAX), Percentage::HUNDRED);
    }

    #[test]
    fn reaches_is_inclusive() {
        let threshold = Percentage::new(30);
        assert!(Percentage::new(30).reaches(threshold));
        assert!(Percentage::new(31).reaches(threshold));
        assert!(!Percentage::new(29).reaches(threshold));
    }

    #[test]
    fn shows_percent_sign() {
        assert_eq!(Percentage::new(45).to_string(), "45%");
    }

    #[test]
    fn encodes_as_bare_number() {
        assert_eq!(serde_json::to_string(&Percentage::new(87)).unwrap(), "87");
    }
}
