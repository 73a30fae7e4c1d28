//! vconv - 4-bit DAC/ADC converter tool
//!
//! Runs the converter demo and one-shot conversions from the command line.

mod commands;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::commands::Commands;

#[derive(Parser)]
#[command(name = "vconv")]
#[command(about = "4-bit DAC/ADC converter")]
#[command(long_about = "4-bit DAC/ADC converter

Commands:
  demo        Convert the standard example codes and voltages
  dac         Convert a 4-bit binary code to a voltage
  adc         Quantize a voltage to a 4-bit binary code
  table       Print the full code-to-voltage transfer table

Examples:
  vconv demo                    # Examples at the configured reference
  vconv dac 1010                # 3.12 V at 5.0 V reference
  vconv -r 3.3 adc 1.2          # Quantize against 3.3 V
  vconv --json table            # Transfer table as JSON

Configuration is read from --config, then VCONV_* environment variables
(VCONV_REFERENCE_VOLTAGE, VCONV_ROUNDING, VCONV_OVERFLOW).")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Configuration file (.yaml, .toml or .json)
    #[arg(short = 'c', long = "config", global = true)]
    config: Option<PathBuf>,

    /// Reference voltage in volts (overrides configuration)
    #[arg(short = 'r', long = "reference", global = true)]
    reference: Option<f64>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.no_color {
        colored::control::set_override(false);
    }

    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let conv = commands::build_converter(cli.config.as_deref(), cli.reference)?;
    println!("{}", commands::execute(&cli.command, &conv, cli.json)?);

    Ok(())
}
