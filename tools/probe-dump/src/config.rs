//! probe-dump configuration
//!
//! Loaded through `common::config_loader`: defaults, then
//! `config/probe-dump.{yaml,toml}`, then `PROBE_DUMP_*` environment variables.

use anyhow::{bail, Context, Result};
use probe_telemetry::{PackedBuffer, FIELD_COUNT};
use serde::{Deserialize, Serialize};

use crate::report::SAMPLE_FRAME;

pub const SERVICE_NAME: &str = "probe-dump";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DumpConfig {
    pub log: LogSection,
    /// Hex blob replacing the built-in sample frame
    pub sample: Option<String>,
    /// Fields written into a zeroed buffer for the write-back block
    pub write_back: Vec<FieldWrite>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogSection {
    pub level: String,
    pub json: bool,
}

/// One write-back entry; `field` is 1-based like the report lines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldWrite {
    pub field: usize,
    pub value: u16,
}

impl Default for DumpConfig {
    fn default() -> Self {
        Self {
            log: LogSection::default(),
            sample: None,
            write_back: vec![
                FieldWrite { field: 1, value: 823 },
                FieldWrite { field: 2, value: 5 },
            ],
        }
    }
}

impl Default for LogSection {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            json: false,
        }
    }
}

impl DumpConfig {
    /// Frame to decode: the configured blob, or the built-in sample
    pub fn sample_buffer(&self) -> Result<PackedBuffer> {
        let Some(blob) = self.sample.as_deref() else {
            return Ok(PackedBuffer::new(SAMPLE_FRAME));
        };

        let bytes = common::hex::decode_blob(blob).context("Invalid sample blob")?;
        PackedBuffer::try_from(bytes.as_slice()).context("Invalid sample blob")
    }

    /// Write-back entries as 0-based `(index, value)` pairs
    pub fn write_pairs(&self) -> Result<Vec<(usize, u16)>> {
        self.write_back
            .iter()
            .map(|w| {
                if w.field == 0 || w.field > FIELD_COUNT {
                    bail!(
                        "write_back field {} out of range (1..={})",
                        w.field,
                        FIELD_COUNT
                    );
                }
                Ok((w.field - 1, w.value))
            })
            .collect()
    }
}
