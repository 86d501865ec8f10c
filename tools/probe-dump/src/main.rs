//! probe-dump - Packed probe frame diagnostic
//!
//! Decodes a 13-byte probe temperature frame into its eight 13-bit readings,
//! prints them with their temperatures, then writes fields back into a zeroed
//! frame and dumps the resulting bytes. Logs go to stderr; the report is the
//! only thing written to stdout.

mod config;
mod report;

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use common::hex::encode_upper;
use common::LogConfig;
use probe_telemetry::{celsius_to_fahrenheit, decode, encode_partial, physical_value};
use tracing::{debug, info};

use crate::config::{DumpConfig, SERVICE_NAME};

#[derive(Parser)]
#[command(name = "probe-dump")]
#[command(about = "Decode a packed probe temperature frame and dump a write-back buffer")]
#[command(version)]
struct Cli {
    /// Configuration file (default: config/probe-dump.{yaml,toml} if present)
    #[arg(short = 'c', long = "config")]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn load_config(cli: &Cli) -> Result<DumpConfig> {
    let config = match cli.config.as_deref() {
        Some(path) => common::load_config_from_file(SERVICE_NAME, path),
        None => common::load_config(SERVICE_NAME, "config"),
    };
    config.context("Failed to load probe-dump configuration")
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = load_config(&cli)?;

    let level = if cli.verbose {
        "debug".to_string()
    } else {
        config.log.level.clone()
    };
    common::logging::init_with_config(&LogConfig {
        service_name: SERVICE_NAME.to_string(),
        level,
        enable_json: config.log.json,
    })?;

    let sample = config.sample_buffer()?;
    info!("Decoding frame {}", encode_upper(sample.as_bytes()));

    let fields = decode(&sample);
    let t1 = physical_value(fields.as_array()[0]);
    debug!(
        "T1 {} deg C={} degF={}",
        fields.as_array()[0],
        t1,
        celsius_to_fahrenheit(t1)
    );

    let writes = config.write_pairs()?;
    let encoded = encode_partial(&writes).context("Write-back failed")?;
    info!(
        "Wrote {} field(s) back: {}",
        writes.len(),
        encode_upper(encoded.as_bytes())
    );

    let mut out = std::io::stdout().lock();
    out.write_all(report::render_readings(&fields).as_bytes())?;
    out.write_all(report::render_write_back(&encoded)?.as_bytes())?;
    out.flush()?;

    Ok(())
}
