//! Subcommand implementations for vconv
//!
//! `build_converter` resolves configuration and CLI overrides; `execute`
//! runs a subcommand and renders it as text or JSON. `main` only prints.

use std::path::Path;

use anyhow::{Context, Result};
use clap::Subcommand;
use colored::*;
use serde::Serialize;
use tracing::debug;
use voltage_convert::{config, BinaryCode, Converter};

/// Codes exercised by `vconv demo`
pub const DEMO_CODES: [&str; 4] = ["1010", "0101", "1111", "0000"];

/// Voltages exercised by `vconv demo`
pub const DEMO_VOLTAGES: [f64; 4] = [3.12, 1.56, 4.69, 0.0];

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Convert the standard example codes and voltages
    Demo,

    /// Convert a 4-bit binary code to a voltage
    Dac {
        /// Binary code, MSB first (e.g. 1010)
        code: String,
    },

    /// Quantize a voltage to a 4-bit binary code
    Adc {
        /// Input voltage in volts
        #[arg(allow_negative_numbers = true)]
        voltage: f64,
    },

    /// Print the full code-to-voltage transfer table
    Table,
}

#[derive(Debug, Serialize, PartialEq)]
pub struct DacRecord {
    pub code: BinaryCode,
    pub voltage: f64,
}

#[derive(Debug, Serialize, PartialEq)]
pub struct AdcRecord {
    pub voltage: f64,
    pub code: BinaryCode,
}

#[derive(Debug, Serialize, PartialEq)]
pub struct DemoReport {
    pub reference_voltage: f64,
    pub dac: Vec<DacRecord>,
    pub adc: Vec<AdcRecord>,
}

/// Load configuration, apply the `--reference` override and build the converter
pub fn build_converter(config_path: Option<&Path>, reference: Option<f64>) -> Result<Converter> {
    let mut converter_config =
        config::load_config(config_path).context("Failed to load configuration")?;
    if let Some(reference) = reference {
        converter_config.reference_voltage = reference;
    }

    let conv = Converter::from_config(&converter_config).context("Invalid reference voltage")?;
    debug!(
        reference = conv.reference_voltage(),
        rounding = ?conv.rounding(),
        overflow = ?conv.overflow(),
        "converter ready"
    );
    Ok(conv)
}

/// Run a subcommand and render its output
pub fn execute(command: &Commands, conv: &Converter, json: bool) -> Result<String> {
    match command {
        Commands::Demo => {
            let report = demo(conv)?;
            if json {
                return to_json(&report);
            }
            let mut out = vec![format!(
                "{} {} V",
                "Reference voltage:".bright_cyan(),
                conv.reference_voltage()
            )];
            out.extend(report.lines());
            Ok(out.join("\n"))
        },
        Commands::Dac { code } => {
            let record = dac(conv, code)?;
            if json {
                return to_json(&record);
            }
            Ok(record.line())
        },
        Commands::Adc { voltage } => {
            let record = adc(conv, *voltage)?;
            if json {
                return to_json(&record);
            }
            Ok(record.line())
        },
        Commands::Table => {
            let rows = table(conv);
            if json {
                return to_json(&rows);
            }
            let mut out = vec![format!(
                "Transfer table (reference {} V, step {} V)",
                conv.reference_voltage(),
                conv.step()
            )
            .bold()
            .to_string()];
            out.extend(
                rows.iter()
                    .map(|row| format!("  {}  {:>8.4} V", row.code.to_string().green(), row.voltage)),
            );
            Ok(out.join("\n"))
        },
    }
}

fn to_json<T: Serialize>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

pub fn dac(conv: &Converter, code: &str) -> Result<DacRecord> {
    let code: BinaryCode = code
        .parse()
        .with_context(|| format!("cannot convert {:?} to a voltage", code))?;
    Ok(DacRecord {
        code,
        voltage: conv.to_voltage(code),
    })
}

pub fn adc(conv: &Converter, voltage: f64) -> Result<AdcRecord> {
    let code = conv
        .to_code(voltage)
        .with_context(|| format!("cannot quantize {} V", voltage))?;
    Ok(AdcRecord { voltage, code })
}

pub fn demo(conv: &Converter) -> Result<DemoReport> {
    debug!(reference = conv.reference_voltage(), "running demo");

    let dac_records = DEMO_CODES
        .iter()
        .map(|code| dac(conv, code))
        .collect::<Result<Vec<_>>>()?;
    let adc_records = DEMO_VOLTAGES
        .iter()
        .map(|&v| adc(conv, v))
        .collect::<Result<Vec<_>>>()?;

    Ok(DemoReport {
        reference_voltage: conv.reference_voltage(),
        dac: dac_records,
        adc: adc_records,
    })
}

pub fn table(conv: &Converter) -> Vec<DacRecord> {
    conv.transfer_table()
        .into_iter()
        .map(|(code, voltage)| DacRecord { code, voltage })
        .collect()
}

impl DacRecord {
    pub fn line(&self) -> String {
        format!("DAC Output for {}: {:.2} V", self.code, self.voltage)
    }
}

impl AdcRecord {
    // Debug keeps the trailing ".0" on whole volts
    pub fn line(&self) -> String {
        format!("ADC Output for {:?} V: {}", self.voltage, self.code)
    }
}

impl DemoReport {
    pub fn lines(&self) -> Vec<String> {
        self.dac
            .iter()
            .map(DacRecord::line)
            .chain(self.adc.iter().map(AdcRecord::line))
            .collect()
    }
}
