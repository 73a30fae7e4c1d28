//! Error types for voltage-convert

use thiserror::Error;

/// Conversion errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConvertError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl ConvertError {
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// True for the argument-validation kind
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }
}

pub type Result<T> = std::result::Result<T, ConvertError>;
