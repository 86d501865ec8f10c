//! Layered configuration loading
//!
//! Priority (highest to lowest):
//! 1. Environment variables prefixed with the tool name (`PROBE_DUMP_...`),
//!    nested keys separated by `__` (`PROBE_DUMP_LOG__LEVEL=debug`)
//! 2. `<dir>/<tool>.toml`
//! 3. `<dir>/<tool>.yaml`
//! 4. `Default` values of the config type

use crate::error::{Error, Result};
use figment::{
    providers::{Env, Format, Json, Serialized, Toml, Yaml},
    Figment,
};
use serde::{de::DeserializeOwned, Serialize};
use std::path::Path;
use tracing::debug;

/// Environment variable prefix for a tool: `probe-dump` -> `PROBE_DUMP_`
pub fn env_prefix(service_name: &str) -> String {
    format!("{}_", service_name.replace('-', "_").to_uppercase())
}

/// Load configuration for `service_name` from `config_dir` and the environment
pub fn load_config<T>(service_name: &str, config_dir: impl AsRef<Path>) -> Result<T>
where
    T: Serialize + DeserializeOwned + Default,
{
    let dir = config_dir.as_ref();
    debug!("Loading {} configuration from {}", service_name, dir.display());

    Figment::from(Serialized::defaults(T::default()))
        .merge(Yaml::file(dir.join(format!("{}.yaml", service_name))))
        .merge(Toml::file(dir.join(format!("{}.toml", service_name))))
        .merge(Env::prefixed(&env_prefix(service_name)).split("__"))
        .extract()
        .map_err(|e| Error::Config(format!("Failed to load configuration: {}", e)))
}

/// Load configuration from one explicit file layered over defaults
///
/// Environment overrides still apply on top of the file.
pub fn load_config_from_file<T>(service_name: &str, path: impl AsRef<Path>) -> Result<T>
where
    T: Serialize + DeserializeOwned + Default,
{
    let path = path.as_ref();
    if !path.exists() {
        return Err(Error::Config(format!(
            "Config file not found: {}",
            path.display()
        )));
    }

    let extension = path
        .extension()
        .and_then(|s| s.to_str())
        .ok_or_else(|| Error::Config("Config file must have an extension".to_string()))?;

    let figment = Figment::from(Serialized::defaults(T::default()));
    let figment = match extension {
        "toml" => figment.merge(Toml::file(path)),
        "yaml" | "yml" => figment.merge(Yaml::file(path)),
        "json" => figment.merge(Json::file(path)),
        _ => {
            return Err(Error::Config(format!(
                "Unsupported config file format: {}",
                extension
            )))
        },
    };

    figment
        .merge(Env::prefixed(&env_prefix(service_name)).split("__"))
        .extract()
        .map_err(|e| {
            Error::Config(format!(
                "Failed to load configuration from {}: {}",
                path.display(),
                e
            ))
        })
}
