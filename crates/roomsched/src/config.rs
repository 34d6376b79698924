/// Runtime configuration read from `ROOMSCHED_*` environment variables
use std::path::PathBuf;

use figment::providers::{Env, Serialized};
use figment::Figment;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::Level;

/// What to do when a proposed layout double-books a slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConflictPolicy {
    /// Refuse the write with 409 Conflict
    #[default]
    Reject,
    /// Accept the write and return the conflicts alongside it
    Warn,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config error: {0}")]
    Figment(#[from] figment::Error),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub address: String,
    pub port: u16,
    pub db_path: String,
    /// Catalog JSON to use instead of the standard catalog
    pub catalog_path: Option<PathBuf>,
    pub conflict_policy: ConflictPolicy,
    #[serde(with = "level_format")]
    pub log_level: Level,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            address: "127.0.0.1".to_string(),
            port: 8080,
            db_path: "rooms.db".to_string(),
            catalog_path: None,
            conflict_policy: ConflictPolicy::Reject,
            log_level: Level::INFO,
        }
    }
}

impl AppConfig {
    /// Defaults overlaid with `ROOMSCHED_*` environment variables.
    pub fn figment() -> Figment {
        Figment::from(Serialized::defaults(AppConfig::default()))
            .merge(Env::prefixed("ROOMSCHED_"))
    }

    /// Reads configuration from the process environment, falling back to
    /// defaults for unset variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_figment(Self::figment())
    }

    pub fn from_figment(figment: Figment) -> Result<Self, ConfigError> {
        let mut config: AppConfig = figment.extract()?;
        // An empty ROOMSCHED_CATALOG_PATH means "use the standard catalog"
        config.catalog_path = config
            .catalog_path
            .filter(|p| !p.as_os_str().is_empty());
        Ok(config)
    }
}

mod level_format {
    use serde::{Deserialize, Deserializer, Serializer};
    use tracing::Level;

    pub fn serialize<S: Serializer>(level: &Level, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(level)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Level, D::Error> {
        let value = String::deserialize(deserializer)?;
        value.trim().parse().map_err(serde::de::Error::custom)
    }
}
