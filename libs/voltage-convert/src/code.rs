//! 4-bit binary code
//!
//! A `BinaryCode` is validated once at construction and is always a
//! 4-symbol code over `{0, 1}`, most-significant bit first.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ConvertError, Result};

/// Bit width of every code
pub const BITS: usize = 4;

/// Number of quantization levels (2^BITS)
pub const LEVELS: u8 = 1 << BITS;

/// Highest representable level
pub const MAX_LEVEL: u8 = LEVELS - 1;

/// Validated 4-bit digital sample
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct BinaryCode(u8);

impl BinaryCode {
    pub const ZERO: Self = Self(0);
    pub const FULL_SCALE: Self = Self(MAX_LEVEL);

    /// Parse a code from text such as `"1010"`
    pub fn parse(text: &str) -> Result<Self> {
        let len = text.chars().count();
        if len != BITS {
            return Err(ConvertError::invalid_argument(format!(
                "binary code must be exactly {} bits, got {} in {:?}",
                BITS, len, text
            )));
        }

        let mut level = 0u8;
        for ch in text.chars() {
            let bit = match ch {
                '0' => 0,
                '1' => 1,
                other => {
                    return Err(ConvertError::invalid_argument(format!(
                        "binary code may only contain '0' or '1', found {:?} in {:?}",
                        other, text
                    )))
                },
            };
            level = (level << 1) | bit;
        }

        Ok(Self(level))
    }

    /// Build a code from its integer level (0..=15)
    pub fn from_level(level: u8) -> Result<Self> {
        if level > MAX_LEVEL {
            return Err(ConvertError::invalid_argument(format!(
                "level {} does not fit in {} bits (max {})",
                level, BITS, MAX_LEVEL
            )));
        }
        Ok(Self(level))
    }

    /// Build a code from bits ordered MSB first
    pub fn from_bits(bits: [bool; BITS]) -> Self {
        Self(bits.iter().fold(0u8, |acc, &b| (acc << 1) | u8::from(b)))
    }

    /// Integer level of the code
    pub fn level(self) -> u8 {
        self.0
    }

    /// Bits ordered MSB first
    pub fn bits(self) -> [bool; BITS] {
        let mut out = [false; BITS];
        for (i, bit) in out.iter_mut().enumerate() {
            *bit = (self.0 >> (BITS - 1 - i)) & 1 == 1;
        }
        out
    }

    /// All 16 codes in ascending order
    pub fn all() -> impl Iterator<Item = Self> {
        (0..LEVELS).map(Self)
    }
}

impl fmt::Display for BinaryCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:0width$b}", self.0, width = BITS)
    }
}

impl FromStr for BinaryCode {
    type Err = ConvertError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for BinaryCode {
    type Error = ConvertError;

    fn try_from(value: &str) -> Result<Self> {
        Self::parse(value)
    }
}

impl TryFrom<String> for BinaryCode {
    type Error = ConvertError;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl TryFrom<u8> for BinaryCode {
    type Error = ConvertError;

    fn try_from(value: u8) -> Result<Self> {
        Self::from_level(value)
    }
}

impl From<BinaryCode> for String {
    fn from(code: BinaryCode) -> Self {
        code.to_string()
    }
}

impl From<BinaryCode> for u8 {
    fn from(code: BinaryCode) -> Self {
        code.0
    }
}
