//! Quantization policies
//!
//! Rounding of the raw quotient and handling of levels that fall outside
//! the 4-bit range are explicit choices carried by the converter.

use serde::{Deserialize, Serialize};

use crate::code::MAX_LEVEL;

/// How `input / step` is rounded to an integer level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundingMode {
    /// Ties go to the even neighbour: 2.5 -> 2, 3.5 -> 4
    #[default]
    HalfToEven,
    /// Ties go away from zero: 2.5 -> 3
    HalfAwayFromZero,
}

impl RoundingMode {
    pub fn apply(self, value: f64) -> f64 {
        match self {
            Self::HalfToEven => value.round_ties_even(),
            Self::HalfAwayFromZero => value.round(),
        }
    }
}

/// What happens to a rounded level outside `0..=15`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverflowPolicy {
    /// Clamp to the nearest representable level
    #[default]
    Saturate,
    /// Fail with an invalid-argument error
    Reject,
}

/// Outcome of fitting a rounded level into 4 bits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Fit {
    InRange(u8),
    Saturated(u8),
    Overflow,
}

impl OverflowPolicy {
    pub(crate) fn fit(self, level: f64) -> Fit {
        let max = f64::from(MAX_LEVEL);
        if (0.0..=max).contains(&level) {
            return Fit::InRange(level as u8);
        }
        match self {
            Self::Saturate => Fit::Saturated(level.clamp(0.0, max) as u8),
            Self::Reject => Fit::Overflow,
        }
    }
}
