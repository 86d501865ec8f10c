//! Logging setup for probe tools
//!
//! Console logging goes to stderr so that a tool's stdout stays reserved for
//! its report. `RUST_LOG`, when set, overrides the configured level.

use std::io::IsTerminal;
use std::sync::OnceLock;

use tracing::Level;
use tracing_subscriber::{
    fmt::{self, format::Writer, FmtContext, FormatEvent, FormatFields},
    layer::SubscriberExt,
    registry::LookupSpan,
    util::SubscriberInitExt,
    EnvFilter,
};

use crate::error::{Error, Result};

/// Custom format for log level with brackets: `[INFO]`, `[WARN]`, etc.
fn format_level(level: &Level) -> &'static str {
    match *level {
        Level::TRACE => "[TRACE]",
        Level::DEBUG => "[DEBUG]",
        Level::INFO => "[INFO]",
        Level::WARN => "[WARN]",
        Level::ERROR => "[ERROR]",
    }
}

/// Custom event formatter that outputs: `timestamp [LEVEL] message`
///
/// Example output: `2025-12-02T00:50:44.809Z [INFO] Decoded probe frame`
struct BracketedLevelFormat;

impl<S, N> FormatEvent<S, N> for BracketedLevelFormat
where
    S: tracing::Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &tracing::Event<'_>,
    ) -> std::fmt::Result {
        let now = chrono::Utc::now();
        write!(writer, "{} ", now.format("%Y-%m-%dT%H:%M:%S%.3fZ"))?;

        let level = *event.metadata().level();
        if writer.has_ansi_escapes() {
            let color = match level {
                Level::TRACE => "\x1b[35m", // magenta
                Level::DEBUG => "\x1b[34m", // blue
                Level::INFO => "\x1b[32m",  // green
                Level::WARN => "\x1b[33m",  // yellow
                Level::ERROR => "\x1b[31m", // red
            };
            write!(writer, "{}{}\x1b[0m ", color, format_level(&level))?;
        } else {
            write!(writer, "{} ", format_level(&level))?;
        }

        ctx.field_format().format_fields(writer.by_ref(), event)?;

        writeln!(writer)
    }
}

/// Filter string in effect after the first successful init
static CURRENT_FILTER: OnceLock<String> = OnceLock::new();

/// Logger configuration
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Tool name, used in the startup line
    pub service_name: String,
    /// Level or full filter spec (e.g. "info" or "warn,probe_telemetry=debug")
    pub level: String,
    /// Emit JSON lines instead of the bracketed text format
    pub enable_json: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            service_name: "unknown".to_string(),
            level: "warn".to_string(),
            enable_json: false,
        }
    }
}

/// Pick the filter directive: a non-empty `RUST_LOG` wins over the config
fn filter_directive(rust_log: Option<String>, configured: &str) -> String {
    match rust_log {
        Some(env) if !env.trim().is_empty() => env,
        _ => configured.to_string(),
    }
}

/// Initialize logging system with configuration
///
/// Safe to call more than once; only the first call installs a subscriber.
pub fn init_with_config(config: &LogConfig) -> Result<()> {
    if CURRENT_FILTER.get().is_some() {
        return Ok(());
    }

    let directive = filter_directive(std::env::var("RUST_LOG").ok(), &config.level);
    let env_filter = EnvFilter::try_new(&directive)
        .map_err(|e| Error::Logging(format!("invalid log filter '{}': {}", directive, e)))?;

    let registry = tracing_subscriber::registry().with(env_filter);
    let installed = if config.enable_json {
        registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .try_init()
    } else {
        registry
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_ansi(std::io::stderr().is_terminal())
                    .event_format(BracketedLevelFormat),
            )
            .try_init()
    };
    installed.map_err(|e| Error::Logging(e.to_string()))?;

    let _ = CURRENT_FILTER.set(directive.clone());
    tracing::debug!("{} logging initialized with filter '{}'", config.service_name, directive);
    Ok(())
}

/// Shorthand for [`init_with_config`] with only a level
pub fn init(service_name: &str, level: &str) -> Result<()> {
    init_with_config(&LogConfig {
        service_name: service_name.to_string(),
        level: level.to_string(),
        ..Default::default()
    })
}

/// Current log filter, or "uninitialized"
pub fn get_log_level() -> String {
    CURRENT_FILTER
        .get()
        .cloned()
        .unwrap_or_else(|| "uninitialized".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_level() {
        assert_eq!(format_level(&Level::INFO), "[INFO]");
        assert_eq!(format_level(&Level::ERROR), "[ERROR]");
        assert_eq!(format_level(&Level::TRACE), "[TRACE]");
    }

    #[test]
    fn test_filter_directive_prefers_rust_log() {
        assert_eq!(
            filter_directive(Some("debug,probe_telemetry=trace".to_string()), "warn"),
            "debug,probe_telemetry=trace"
        );
    }

    #[test]
    fn test_filter_directive_falls_back_to_config() {
        assert_eq!(filter_directive(None, "info"), "info");
        assert_eq!(filter_directive(Some("  ".to_string()), "info"), "info");
    }

    #[test]
    fn test_init_installs_once() {
        let expected = filter_directive(std::env::var("RUST_LOG").ok(), "info");
        assert!(init("probe-dump", "info").is_ok());
        assert_eq!(get_log_level(), expected);

        // Second call keeps the first subscriber and its filter
        assert!(init("probe-dump", "trace").is_ok());
        assert_eq!(get_log_level(), expected);
    }

    #[test]
    fn test_default_config() {
        let config = LogConfig::default();
        assert_eq!(config.level, "warn");
        assert!(!config.enable_json);
    }
}
