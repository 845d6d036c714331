use serde::{Deserialize, Serialize};
use std::path::Path;

use super::logging::LOG_LEVELS;
use super::resolver::MAX_DURATION_SECS;
use super::{ConfigError, InventoryConfig, LoggingConfig, ResolverConfig};
use crate::SubnetSelector;

/// Root configuration, read from a TOML file
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub resolver: ResolverConfig,

    #[serde(default)]
    pub inventory: InventoryConfig,

    #[serde(default)]
    pub logging: LoggingConfig,

    /// Default selector used when none is given on the command line
    #[serde(default)]
    pub selector: Option<SubnetSelector>,
}

/// Values given on the command line take precedence over the file
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub inventory_path: Option<String>,
    pub log_level: Option<String>,
    pub cache_ttl_secs: Option<u64>,
    pub lookup_timeout_secs: Option<u64>,
}

impl Config {
    /// Load configuration from `config_path` (defaults when `None`) and apply
    /// CLI overrides. An explicitly given file that does not exist is an error.
    pub fn load(config_path: Option<&str>, overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = match config_path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };

        config.apply_overrides(overrides);
        Ok(config)
    }

    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        if !Path::new(path).exists() {
            return Err(ConfigError::FileNotFound(path.to_string()));
        }

        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_string(),
            source,
        })?;

        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    pub fn apply_overrides(&mut self, overrides: CliOverrides) {
        if let Some(path) = overrides.inventory_path {
            self.inventory.path = Some(path);
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
        if let Some(ttl) = overrides.cache_ttl_secs {
            self.resolver.cache_ttl_secs = ttl;
        }
        if let Some(timeout) = overrides.lookup_timeout_secs {
            self.resolver.lookup_timeout_secs = timeout;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let durations = [
            ("resolver.cache_ttl_secs", self.resolver.cache_ttl_secs),
            ("resolver.cleanup_interval_secs", self.resolver.cleanup_interval_secs),
            ("resolver.lookup_timeout_secs", self.resolver.lookup_timeout_secs),
        ];
        for (name, secs) in durations {
            if secs == 0 {
                return Err(ConfigError::Validation(format!("{name} must be greater than 0")));
            }
            if secs > MAX_DURATION_SECS {
                return Err(ConfigError::Validation(format!(
                    "{name} must be at most {MAX_DURATION_SECS}, got {secs}"
                )));
            }
        }

        let level = self.logging.level.to_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            return Err(ConfigError::Validation(format!(
                "logging.level must be one of {:?}, got {:?}",
                LOG_LEVELS, self.logging.level
            )));
        }

        Ok(())
    }
}
