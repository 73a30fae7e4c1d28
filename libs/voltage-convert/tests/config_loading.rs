//! Integration tests for converter configuration loading
//!
//! Each test uses its own environment prefix so parallel runs don't interfere.

#![allow(clippy::disallowed_methods)] // Test code - unwrap is acceptable

use std::io::Write;

use tempfile::Builder;
use voltage_convert::config::load_config_with_prefix;
use voltage_convert::{ConvertError, Converter, OverflowPolicy, RoundingMode};

fn write_config(suffix: &str, contents: &str) -> tempfile::NamedTempFile {
    let mut file = Builder::new().suffix(suffix).tempfile().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn yaml_file_overrides_defaults() {
    let file = write_config(
        ".yaml",
        "reference_voltage: 3.3\nrounding: half_away_from_zero\n",
    );

    let config = load_config_with_prefix(Some(file.path()), "VCONV_TEST_YAML_").unwrap();
    assert_eq!(config.reference_voltage, 3.3);
    assert_eq!(config.rounding, RoundingMode::HalfAwayFromZero);
    // Not set in the file, default kept
    assert_eq!(config.overflow, OverflowPolicy::Saturate);
}

#[test]
fn toml_file_is_supported() {
    let file = write_config(".toml", "reference_voltage = 12.0\noverflow = \"reject\"\n");

    let config = load_config_with_prefix(Some(file.path()), "VCONV_TEST_TOML_").unwrap();
    assert_eq!(config.reference_voltage, 12.0);
    assert_eq!(config.overflow, OverflowPolicy::Reject);

    let conv = Converter::from_config(&config).unwrap();
    assert!(conv.to_code(12.0).is_err());
}

#[test]
fn json_file_is_supported() {
    let file = write_config(".json", r#"{ "reference_voltage": 1.6 }"#);

    let config = load_config_with_prefix(Some(file.path()), "VCONV_TEST_JSON_").unwrap();
    assert_eq!(config.reference_voltage, 1.6);
}

#[test]
fn environment_overrides_file() {
    let file = write_config(".yaml", "reference_voltage: 3.3\n");
    std::env::set_var("VCONV_TEST_ENV_REFERENCE_VOLTAGE", "10.0");
    std::env::set_var("VCONV_TEST_ENV_OVERFLOW", "reject");

    let config = load_config_with_prefix(Some(file.path()), "VCONV_TEST_ENV_").unwrap();
    assert_eq!(config.reference_voltage, 10.0);
    assert_eq!(config.overflow, OverflowPolicy::Reject);

    std::env::remove_var("VCONV_TEST_ENV_REFERENCE_VOLTAGE");
    std::env::remove_var("VCONV_TEST_ENV_OVERFLOW");
}

#[test]
fn invalid_reference_is_rejected() {
    let file = write_config(".yaml", "reference_voltage: 0.0\n");

    let err = load_config_with_prefix(Some(file.path()), "VCONV_TEST_BAD_").unwrap_err();
    assert!(matches!(err, ConvertError::Config(_)));
}

#[test]
fn unknown_policy_is_rejected() {
    let file = write_config(".yaml", "rounding: truncate\n");

    let err = load_config_with_prefix(Some(file.path()), "VCONV_TEST_POLICY_").unwrap_err();
    assert!(matches!(err, ConvertError::Config(_)));
}

#[test]
fn unsupported_extension_is_rejected() {
    let file = write_config(".ini", "reference_voltage=5\n");

    let err = load_config_with_prefix(Some(file.path()), "VCONV_TEST_INI_").unwrap_err();
    assert!(err.to_string().contains("Unsupported config file format"));
}
