//! Converter bound to a reference voltage
//!
//! The DAC and ADC halves live in `dac.rs` and `adc.rs`; this module owns
//! the shared scaling state and its validation.

use crate::code::{BinaryCode, LEVELS};
use crate::config::ConverterConfig;
use crate::error::{ConvertError, Result};
use crate::policy::{OverflowPolicy, RoundingMode};

/// 4-bit DAC/ADC pair sharing one reference voltage
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Converter {
    reference_voltage: f64,
    rounding: RoundingMode,
    overflow: OverflowPolicy,
}

impl Converter {
    /// Create a converter with the default policies
    ///
    /// Fails when the reference voltage is not a positive, finite number.
    pub fn new(reference_voltage: f64) -> Result<Self> {
        validate_reference(reference_voltage)?;
        Ok(Self {
            reference_voltage,
            rounding: RoundingMode::default(),
            overflow: OverflowPolicy::default(),
        })
    }

    pub fn from_config(config: &ConverterConfig) -> Result<Self> {
        Ok(Self::new(config.reference_voltage)?
            .with_rounding(config.rounding)
            .with_overflow(config.overflow))
    }

    pub fn with_rounding(mut self, rounding: RoundingMode) -> Self {
        self.rounding = rounding;
        self
    }

    pub fn with_overflow(mut self, overflow: OverflowPolicy) -> Self {
        self.overflow = overflow;
        self
    }

    pub fn reference_voltage(&self) -> f64 {
        self.reference_voltage
    }

    pub fn rounding(&self) -> RoundingMode {
        self.rounding
    }

    pub fn overflow(&self) -> OverflowPolicy {
        self.overflow
    }

    /// Quantization step: the voltage of one LSB
    pub fn step(&self) -> f64 {
        self.reference_voltage / f64::from(LEVELS)
    }

    /// Every code with its DAC voltage, lowest first
    pub fn transfer_table(&self) -> Vec<(BinaryCode, f64)> {
        BinaryCode::all()
            .map(|code| (code, self.to_voltage(code)))
            .collect()
    }
}

pub(crate) fn validate_reference(reference_voltage: f64) -> Result<()> {
    if !reference_voltage.is_finite() || reference_voltage <= 0.0 {
        return Err(ConvertError::invalid_argument(format!(
            "reference voltage must be positive and finite, got {}",
            reference_voltage
        )));
    }
    // step must stay a normal float or input / step loses meaning
    if !(reference_voltage / f64::from(LEVELS)).is_normal() {
        return Err(ConvertError::invalid_argument(format!(
            "reference voltage {:e} is too small to quantize",
            reference_voltage
        )));
    }
    Ok(())
}
