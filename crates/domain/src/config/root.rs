use serde::{Deserialize, Serialize};
use std::fs;

use crate::dns_query::to_fqdn;

use super::dns::DnsConfig;
use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::sweep::SweepConfig;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Main configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub dns: DnsConfig,

    #[serde(default)]
    pub sweep: SweepConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Values passed on the command line. Each one wins over the file.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub resolv_conf: Option<String>,
    pub port: Option<u16>,
    pub query_timeout: Option<u64>,
    pub log_level: Option<String>,
}

impl Config {
    /// Load configuration from `path` (or defaults when `None`) and apply
    /// command-line overrides on top.
    pub fn load(path: Option<&str>, overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };

        config.apply_overrides(overrides);
        Ok(config)
    }

    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_string(),
            source: e,
        })?;

        Self::from_toml(path, &content)
    }

    fn from_toml(path: &str, content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse {
            path: path.to_string(),
            message: e.to_string(),
        })
    }

    pub fn apply_overrides(&mut self, overrides: CliOverrides) {
        if let Some(resolv_conf) = overrides.resolv_conf {
            self.dns.resolv_conf = resolv_conf;
        }
        if let Some(port) = overrides.port {
            self.dns.port = Some(port);
        }
        if let Some(timeout) = overrides.query_timeout {
            self.dns.query_timeout = Some(timeout);
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.dns.resolv_conf.trim().is_empty() {
            return Err(ConfigError::Validation(
                "dns.resolv_conf cannot be empty".to_string(),
            ));
        }

        if self.dns.port == Some(0) {
            return Err(ConfigError::Validation(
                "dns.port must be greater than 0".to_string(),
            ));
        }

        if self.dns.query_timeout == Some(0) {
            return Err(ConfigError::Validation(
                "dns.query_timeout must be greater than 0".to_string(),
            ));
        }

        if !LOG_LEVELS.contains(&self.logging.level.to_lowercase().as_str()) {
            return Err(ConfigError::Validation(format!(
                "logging.level '{}' is not one of {}",
                self.logging.level,
                LOG_LEVELS.join(", ")
            )));
        }

        if let Some(label) = self
            .sweep
            .probe_labels
            .iter()
            .find(|l| l.contains('.') || to_fqdn(&format!("{}.example", l)).is_err())
        {
            return Err(ConfigError::Validation(format!(
                "sweep.probe_labels entry '{}' must be a single non-empty label",
                label
            )));
        }

        let catalog = self.sweep.catalog().map_err(ConfigError::Validation)?;
        if catalog.is_empty() {
            return Err(ConfigError::Validation(
                "sweep catalog has no questions to ask".to_string(),
            ));
        }

        Ok(())
    }
}
