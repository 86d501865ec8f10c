//! Rolling temperature history
//!
//! Keeps a window of timestamped readings and renders it as CSV, newest
//! reading first. Once the window grows past [`BATCH_SIZE`] it is cleared and
//! the batch key advances, so each key names one bounded object.

use chrono::{DateTime, SecondsFormat, Utc};
use tracing::debug;

/// Readings kept per batch before the window rolls over
pub const BATCH_SIZE: usize = 1000;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reading {
    pub temperature: f64,
    pub time: DateTime<Utc>,
}

#[derive(Debug, Clone, Default)]
pub struct TemperatureHistory {
    key: u32,
    window: Vec<Reading>,
}

impl TemperatureHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn key(&self) -> u32 {
        self.key
    }

    pub fn len(&self) -> usize {
        self.window.len()
    }

    pub fn is_empty(&self) -> bool {
        self.window.is_empty()
    }

    pub fn push(&mut self, temperature: f64) {
        self.push_at(temperature, Utc::now());
    }

    pub fn push_at(&mut self, temperature: f64, time: DateTime<Utc>) {
        if self.window.len() > BATCH_SIZE {
            self.window.clear();
            self.key += 1;
            debug!("History window rolled over to batch {}", self.key);
        }

        self.window.push(Reading { temperature, time });
    }

    /// `temp,timestamp` lines joined by newlines, latest reading first
    pub fn serialize(&self) -> String {
        self.window
            .iter()
            .rev()
            .map(|r| {
                format!(
                    "{},{}",
                    r.temperature,
                    r.time.to_rfc3339_opts(SecondsFormat::Millis, true)
                )
            })
            .collect::<Vec<String>>()
            .join("\n")
    }

    /// Object name for the current batch, e.g. `probe/3.csv`
    pub fn object_key(&self, prefix: &str) -> String {
        format!("{}/{}.csv", prefix, self.key)
    }
}
