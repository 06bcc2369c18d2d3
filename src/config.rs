// config.rs
use std::net::SocketAddr;
use std::path::PathBuf;

use thiserror::Error;

pub const ADDR_VAR: &str = "DINO_ADDR";
pub const WORKERS_VAR: &str = "DINO_WORKERS";
pub const CATALOG_VAR: &str = "DINO_CATALOG";
pub const LOG_LEVEL_VAR: &str = "DINO_LOG";
pub const LOG_FILE_VAR: &str = "DINO_LOG_FILE";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value:?} ({reason})")]
    InvalidValue {
        key: &'static str,
        value: String,
        reason: String,
    },
}

/// Runtime settings, taken from `DINO_*` environment variables.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub addr: SocketAddr,
    pub workers: usize,
    pub catalog_path: PathBuf,
    pub log_level: log::LevelFilter,
    /// Log to this file instead of stdout.
    pub log_file: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            workers: 8,
            catalog_path: PathBuf::from("data/catalog.json"),
            log_level: log::LevelFilter::Info,
            log_file: None,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup; unset keys keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup(ADDR_VAR) {
            config.addr = raw.parse().map_err(|e: std::net::AddrParseError| {
                invalid(ADDR_VAR, &raw, e.to_string())
            })?;
        }

        if let Some(raw) = lookup(WORKERS_VAR) {
            config.workers = match raw.parse::<usize>() {
                Ok(0) => return Err(invalid(WORKERS_VAR, &raw, "must be at least 1".into())),
                Ok(n) => n,
                Err(e) => return Err(invalid(WORKERS_VAR, &raw, e.to_string())),
            };
        }

        if let Some(raw) = lookup(CATALOG_VAR).filter(|s| !s.is_empty()) {
            config.catalog_path = PathBuf::from(raw);
        }

        if let Some(raw) = lookup(LOG_LEVEL_VAR) {
            config.log_level = raw.parse().map_err(|_| {
                invalid(
                    LOG_LEVEL_VAR,
                    &raw,
                    "expected off, error, warn, info, debug or trace".into(),
                )
            })?;
        }

        config.log_file = lookup(LOG_FILE_VAR)
            .filter(|s| !s.is_empty())
            .map(PathBuf::from);

        Ok(config)
    }
}

fn invalid(key: &'static str, value: &str, reason: String) -> ConfigError {
    ConfigError::InvalidValue {
        key,
        value: value.to_string(),
        reason,
    }
}
