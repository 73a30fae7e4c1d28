//! Converter configuration
//!
//! Sources, lowest to highest priority:
//! 1. Built-in defaults (5.0 V, half-to-even, saturate)
//! 2. Config file (`.yaml`/`.yml`, `.toml` or `.json`)
//! 3. Environment variables prefixed `VCONV_` (e.g. `VCONV_REFERENCE_VOLTAGE`)

use std::path::Path;

use figment::{
    providers::{Env, Format, Json, Serialized, Toml, Yaml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::converter::validate_reference;
use crate::error::{ConvertError, Result};
use crate::policy::{OverflowPolicy, RoundingMode};

/// Environment variable prefix for configuration overrides
pub const ENV_PREFIX: &str = "VCONV_";

/// Default reference voltage in volts
pub const DEFAULT_REFERENCE_VOLTAGE: f64 = 5.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConverterConfig {
    /// Full-scale voltage shared by the DAC and ADC
    pub reference_voltage: f64,
    pub rounding: RoundingMode,
    pub overflow: OverflowPolicy,
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            reference_voltage: DEFAULT_REFERENCE_VOLTAGE,
            rounding: RoundingMode::default(),
            overflow: OverflowPolicy::default(),
        }
    }
}

impl ConverterConfig {
    pub fn validate(&self) -> Result<()> {
        validate_reference(self.reference_voltage)
            .map_err(|e| ConvertError::config(format!("reference_voltage: {}", e)))
    }
}

/// Load configuration from defaults, an optional file and `VCONV_*` variables
pub fn load_config(path: Option<&Path>) -> Result<ConverterConfig> {
    load_config_with_prefix(path, ENV_PREFIX)
}

/// Same as [`load_config`] with a custom environment prefix
pub fn load_config_with_prefix(path: Option<&Path>, env_prefix: &str) -> Result<ConverterConfig> {
    let mut figment = Figment::from(Serialized::defaults(ConverterConfig::default()));

    if let Some(path) = path {
        if !path.exists() {
            return Err(ConvertError::config(format!(
                "config file not found: {}",
                path.display()
            )));
        }
        figment = merge_file(figment, path)?;
    }

    let config: ConverterConfig = figment
        .merge(Env::prefixed(env_prefix))
        .extract()
        .map_err(|e| ConvertError::config(format!("Failed to load configuration: {}", e)))?;

    config.validate()?;
    tracing::debug!(?config, "converter configuration loaded");
    Ok(config)
}

fn merge_file(figment: Figment, path: &Path) -> Result<Figment> {
    let extension = path
        .extension()
        .and_then(|s| s.to_str())
        .ok_or_else(|| ConvertError::config("Config file must have an extension"))?;

    let figment = match extension {
        "toml" => figment.merge(Toml::file(path)),
        "yaml" | "yml" => figment.merge(Yaml::file(path)),
        "json" => figment.merge(Json::file(path)),
        _ => {
            return Err(ConvertError::config(format!(
                "Unsupported config file format: {}",
                extension
            )))
        },
    };
    Ok(figment)
}
