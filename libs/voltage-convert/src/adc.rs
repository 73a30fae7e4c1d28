//! Analog-to-digital conversion
//!
//! Quantizes `input / step` with the converter's rounding mode, then fits
//! the level into 4 bits with its overflow policy.

use tracing::{debug, warn};

use crate::code::BinaryCode;
use crate::converter::Converter;
use crate::error::{ConvertError, Result};
use crate::policy::Fit;

impl Converter {
    /// Nearest 4-bit code for an input voltage
    ///
    /// # Errors
    /// `InvalidArgument` if the input is negative, not finite, or strictly
    /// greater than the reference voltage, or if the rounded level is out of
    /// range under `OverflowPolicy::Reject`.
    pub fn to_code(&self, input_voltage: f64) -> Result<BinaryCode> {
        let reference = self.reference_voltage();

        if !input_voltage.is_finite() {
            return Err(ConvertError::invalid_argument(format!(
                "input voltage must be finite, got {}",
                input_voltage
            )));
        }
        if input_voltage > reference {
            return Err(ConvertError::invalid_argument(format!(
                "input voltage {} V exceeds reference voltage {} V",
                input_voltage, reference
            )));
        }
        if input_voltage < 0.0 {
            return Err(ConvertError::invalid_argument(format!(
                "input voltage must not be negative, got {} V",
                input_voltage
            )));
        }

        let raw = input_voltage / self.step();
        let rounded = self.rounding().apply(raw);

        let level = match self.overflow().fit(rounded) {
            Fit::InRange(level) => level,
            Fit::Saturated(level) => {
                warn!(
                    input = input_voltage,
                    reference = reference,
                    rounded = rounded,
                    level = level,
                    "ADC level saturated"
                );
                level
            },
            Fit::Overflow => {
                return Err(ConvertError::invalid_argument(format!(
                    "input voltage {} V quantizes to level {} which does not fit in 4 bits",
                    input_voltage, rounded
                )))
            },
        };

        let code = BinaryCode::from_level(level)?;
        debug!(
            input = input_voltage,
            reference = reference,
            raw = raw,
            code = %code,
            "adc"
        );

        Ok(code)
    }
}

/// Quantize an analog voltage to a 4-character binary code
///
/// Uses half-to-even rounding and saturates levels above 15.
///
/// # Errors
/// `InvalidArgument` if the input voltage exceeds the reference voltage, is
/// negative or not finite, or the reference voltage is not positive and
/// finite.
pub fn adc_output(input_voltage: f64, reference_voltage: f64) -> Result<String> {
    let converter = Converter::new(reference_voltage)?;
    Ok(converter.to_code(input_voltage)?.to_string())
}

#[cfg(test)]
#[allow(clippy::disallowed_methods)]
mod tests {
    use super::*;
    use crate::policy::{OverflowPolicy, RoundingMode};
    use tracing_test::traced_test;

    #[test]
    fn test_adc_examples_at_5v() {
        assert_eq!(adc_output(3.12, 5.0).unwrap(), "1010");
        assert_eq!(adc_output(1.56, 5.0).unwrap(), "0101");
        assert_eq!(adc_output(4.69, 5.0).unwrap(), "1111");
        assert_eq!(adc_output(0.0, 5.0).unwrap(), "0000");
    }

    #[test]
    fn test_adc_boundaries() {
        for vref in [1.0, 3.3, 5.0, 12.0] {
            assert_eq!(adc_output(vref, vref).unwrap(), "1111");
            assert_eq!(adc_output(0.0, vref).unwrap(), "0000");
        }
    }

    #[test]
    fn test_adc_above_reference() {
        assert!(adc_output(5.01, 5.0).unwrap_err().is_invalid_argument());
    }

    #[test]
    fn test_adc_rejects_negative_and_non_finite() {
        assert!(adc_output(-0.1, 5.0).unwrap_err().is_invalid_argument());
        assert!(adc_output(f64::NAN, 5.0).unwrap_err().is_invalid_argument());
        assert!(adc_output(f64::INFINITY, 5.0).unwrap_err().is_invalid_argument());
    }

    #[test]
    fn test_adc_rejects_bad_reference() {
        assert!(adc_output(0.0, 0.0).unwrap_err().is_invalid_argument());
        assert!(adc_output(1.0, -5.0).unwrap_err().is_invalid_argument());
    }

    #[test]
    fn test_half_to_even_at_ties() {
        // step = 1.0 V
        let conv = Converter::new(16.0).unwrap();
        assert_eq!(conv.to_code(2.5).unwrap().to_string(), "0010");
        assert_eq!(conv.to_code(3.5).unwrap().to_string(), "0100");
        assert_eq!(conv.to_code(0.5).unwrap().to_string(), "0000");
    }

    #[test]
    fn test_half_away_from_zero_at_ties() {
        let conv = Converter::new(16.0)
            .unwrap()
            .with_rounding(RoundingMode::HalfAwayFromZero);
        assert_eq!(conv.to_code(2.5).unwrap().to_string(), "0011");
        assert_eq!(conv.to_code(0.5).unwrap().to_string(), "0001");
    }

    #[test]
    fn test_reject_policy_fails_above_last_level() {
        let conv = Converter::new(5.0)
            .unwrap()
            .with_overflow(OverflowPolicy::Reject);
        assert_eq!(conv.to_code(4.69).unwrap().to_string(), "1111");
        assert!(conv.to_code(5.0).unwrap_err().is_invalid_argument());
    }

    #[test]
    #[traced_test]
    fn test_saturation_is_logged() {
        let conv = Converter::new(5.0).unwrap();
        assert_eq!(conv.to_code(5.0).unwrap().to_string(), "1111");
        assert!(logs_contain("ADC level saturated"));
    }

    #[test]
    #[traced_test]
    fn test_tiny_reference_is_rejected_without_saturating() {
        let err = adc_output(0.0, 5e-324).unwrap_err();
        assert!(err.is_invalid_argument());
        assert!(!logs_contain("ADC level saturated"));
    }

    #[test]
    #[traced_test]
    fn test_in_range_is_not_logged_as_saturated() {
        let conv = Converter::new(5.0).unwrap();
        assert_eq!(conv.to_code(1.56).unwrap().to_string(), "0101");
        assert!(!logs_contain("ADC level saturated"));
    }
}
