//! Shared runtime support for probe tools
//!
//! Provides the pieces every tool binary needs:
//! - logging setup
//! - layered configuration loading
//! - hex helpers for byte blobs

pub mod config_loader;
pub mod error;
pub mod hex;
pub mod logging;

pub use config_loader::{load_config, load_config_from_file};
pub use error::{Error, Result};
pub use logging::LogConfig;
