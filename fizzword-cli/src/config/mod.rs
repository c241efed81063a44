//! Configuration module

use crate::error::CliError;
use crate::output::OutputFormat;
use anyhow::{Context, Result};
use fizzword_core::{Config, LengthLimits};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default, PartialEq)]
pub struct CliConfig {
    /// Accepted input length range
    #[serde(default)]
    pub limits: LengthLimits,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

/// Output-related configuration
#[derive(Debug, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct OutputConfig {
    /// Format used when `--format` is not given
    pub default_format: OutputFormat,

    /// Pretty print JSON output
    pub pretty_json: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_format: OutputFormat::Text,
            pretty_json: true,
        }
    }
}

impl CliConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::from_toml(&content)
            .with_context(|| format!("Invalid config file: {}", path.display()))
    }

    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: CliConfig =
            toml::from_str(content).map_err(|e| CliError::ConfigError(e.to_string()))?;
        Ok(config)
    }

    /// Core replacer configuration
    pub fn core_config(&self) -> Result<Config> {
        let config = Config::builder()
            .limits(self.limits)
            .build()
            .map_err(|e| CliError::ConfigError(e.to_string()))?;
        Ok(config)
    }
}
