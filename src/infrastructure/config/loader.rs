use std::path::Path;

use anyhow::{Context, Result};
use figment::providers::{Env, Format, Serialized, Yaml};
use figment::Figment;
use thiserror::Error;

use crate::domain::models::config::Config;

/// Largest alphabet that can be indexed by a `char` code point
const MAX_DIMENSIONS: usize = char::MAX as usize + 1;

/// Configuration error types
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Corpus path cannot be empty")]
    EmptyCorpusPath,

    #[error("Invalid dimensions: {0}. Must be between 1 and {max}", max = MAX_DIMENSIONS)]
    InvalidDimensions(usize),

    #[error("No-match message cannot be empty")]
    EmptyNoMatchMessage,

    #[error("Invalid response template: must contain the {{context}} placeholder")]
    InvalidTemplate,

    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Invalid log format: {0}. Must be one of: json, pretty")]
    InvalidLogFormat(String),

    #[error("Invalid log rotation: {0}. Must be one of: daily, hourly, never")]
    InvalidRotation(String),
}

/// Configuration loader with hierarchical merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration with hierarchical merging
    ///
    /// Precedence (lowest to highest):
    /// 1. Programmatic defaults (Serialized)
    /// 2. .docchat/config.yaml (project config, optional)
    /// 3. .docchat/local.yaml (project local overrides, optional)
    /// 4. Environment variables (DOCCHAT_* prefix, highest priority)
    pub fn load() -> Result<Config> {
        let figment = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Yaml::file(".docchat/config.yaml"))
            .merge(Yaml::file(".docchat/local.yaml"));

        Self::extract(figment).context("Failed to extract configuration from figment")
    }

    /// Load configuration from a specific file, still honoring environment overrides
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Config> {
        let path = path.as_ref();
        anyhow::ensure!(path.exists(), "Config file not found: {}", path.display());

        let figment = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Yaml::file(path));

        Self::extract(figment)
            .with_context(|| format!("Failed to load config from {}", path.display()))
    }

    fn extract(figment: Figment) -> Result<Config> {
        let config: Config = figment
            .merge(Env::prefixed("DOCCHAT_").split("__"))
            .extract()?;

        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate configuration after loading
    pub fn validate(config: &Config) -> Result<(), ConfigError> {
        if config.corpus.path.as_os_str().is_empty() {
            return Err(ConfigError::EmptyCorpusPath);
        }

        let dimensions = config.embedding.dimensions;
        if dimensions == 0 || dimensions > MAX_DIMENSIONS {
            return Err(ConfigError::InvalidDimensions(dimensions));
        }

        if config.retrieval.no_match_message.trim().is_empty() {
            return Err(ConfigError::EmptyNoMatchMessage);
        }

        if !config.retrieval.response_template.contains("{context}") {
            return Err(ConfigError::InvalidTemplate);
        }

        let valid_log_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_log_levels.contains(&config.logging.level.to_lowercase().as_str()) {
            return Err(ConfigError::InvalidLogLevel(config.logging.level.clone()));
        }

        let valid_log_formats = ["json", "pretty"];
        if !valid_log_formats.contains(&config.logging.format.as_str()) {
            return Err(ConfigError::InvalidLogFormat(config.logging.format.clone()));
        }

        let valid_rotations = ["daily", "hourly", "never"];
        if !valid_rotations.contains(&config.logging.rotation.as_str()) {
            return Err(ConfigError::InvalidRotation(config.logging.rotation.clone()));
        }

        Ok(())
    }
}
