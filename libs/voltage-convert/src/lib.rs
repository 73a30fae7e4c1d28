//! voltage-convert - 4-bit DAC/ADC conversion library
//!
//! Maps 4-bit binary codes to analog voltages and back over a shared
//! reference voltage.
//!
//! # Features
//!
//! - **DAC**: weighted sum, bit `i` (MSB first) weighs `2^(3-i) / 16` of the reference
//! - **ADC**: `input / (reference / 16)` rounded to the nearest level
//! - **Typed codes**: `BinaryCode` is parsed and checked once, then always valid
//! - **Explicit policies**: rounding mode (half-to-even by default) and overflow handling
//!
//! # Example
//!
//! ```rust
//! use voltage_convert::{adc_output, dac_output, BinaryCode, Converter};
//!
//! // Text-level API
//! assert_eq!(dac_output("1010", 5.0).unwrap(), 3.125);
//! assert_eq!(adc_output(3.12, 5.0).unwrap(), "1010");
//!
//! // Typed API
//! let conv = Converter::new(5.0).unwrap();
//! let code: BinaryCode = "0101".parse().unwrap();
//! let volts = conv.to_voltage(code);
//! assert_eq!(volts, 1.5625);
//! assert_eq!(conv.to_code(volts).unwrap(), code);
//! ```
//!
//! # Policies
//!
//! | Policy | Default | Alternative |
//! |--------|---------|-------------|
//! | `RoundingMode` | `HalfToEven` | `HalfAwayFromZero` |
//! | `OverflowPolicy` | `Saturate` (clamp to `1111`) | `Reject` |

pub mod adc;
pub mod code;
pub mod config;
pub mod converter;
pub mod dac;
pub mod error;
pub mod policy;

// Re-exports for convenience
pub use adc::adc_output;
pub use code::{BinaryCode, BITS, LEVELS, MAX_LEVEL};
pub use config::{load_config, ConverterConfig};
pub use converter::Converter;
pub use dac::dac_output;
pub use error::{ConvertError, Result};
pub use policy::{OverflowPolicy, RoundingMode};
