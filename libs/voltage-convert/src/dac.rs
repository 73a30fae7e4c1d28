//! Digital-to-analog conversion
//!
//! Each bit `i` (0 = MSB) contributes `2^(3-i) / 16` of the reference
//! voltage: 8/16, 4/16, 2/16, 1/16.

use tracing::debug;

use crate::code::{BinaryCode, BITS, LEVELS};
use crate::converter::{validate_reference, Converter};
use crate::error::Result;

/// Positional weight of bit `index`, MSB first
pub fn bit_weight(index: usize) -> f64 {
    f64::from(1u8 << (BITS - 1 - index)) / f64::from(LEVELS)
}

impl Converter {
    /// Weighted-sum voltage of a code
    pub fn to_voltage(&self, code: BinaryCode) -> f64 {
        weighted_sum(code, self.reference_voltage())
    }
}

fn weighted_sum(code: BinaryCode, reference_voltage: f64) -> f64 {
    let fraction: f64 = code
        .bits()
        .iter()
        .enumerate()
        .filter(|&(_, &bit)| bit)
        .map(|(i, _)| bit_weight(i))
        .fold(0.0, |acc, w| acc + w);
    let voltage = reference_voltage * fraction;

    debug!(
        code = %code,
        reference = reference_voltage,
        voltage = voltage,
        "dac"
    );

    voltage
}

/// Convert a 4-character binary code to its analog voltage
///
/// # Errors
/// `InvalidArgument` if the code is not exactly four `0`/`1` characters or
/// the reference voltage is not positive and finite.
pub fn dac_output(binary_code: &str, reference_voltage: f64) -> Result<f64> {
    let code = BinaryCode::parse(binary_code)?;
    validate_reference(reference_voltage)?;
    Ok(weighted_sum(code, reference_voltage))
}
