//! Configuration for the word replacer

use crate::error::{ReplaceError, Result};

/// Default inclusive lower bound on input length, in characters
pub const DEFAULT_MIN_LENGTH: usize = 7;

/// Default inclusive upper bound on input length, in characters
pub const DEFAULT_MAX_LENGTH: usize = 100;

/// Inclusive bounds on input length, measured in characters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LengthLimits {
    /// Shortest accepted input
    pub min: usize,
    /// Longest accepted input
    pub max: usize,
}

impl Default for LengthLimits {
    fn default() -> Self {
        Self {
            min: DEFAULT_MIN_LENGTH,
            max: DEFAULT_MAX_LENGTH,
        }
    }
}

impl LengthLimits {
    /// Whether `length` lies within the bounds
    pub fn contains(&self, length: usize) -> bool {
        (self.min..=self.max).contains(&length)
    }
}

/// Word replacer configuration
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Config {
    /// Accepted input length range
    pub limits: LengthLimits,
}

impl Config {
    /// Create a builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Check that the configuration is internally consistent
    pub fn validate(&self) -> Result<()> {
        if self.limits.min == 0 {
            return Err(ReplaceError::Config(
                "minimum length must be greater than 0".to_string(),
            ));
        }
        if self.limits.min > self.limits.max {
            return Err(ReplaceError::Config(format!(
                "minimum length {} exceeds maximum length {}",
                self.limits.min, self.limits.max
            )));
        }
        Ok(())
    }
}

/// Configuration builder
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the minimum accepted length
    pub fn min_length(mut self, min: usize) -> Self {
        self.config.limits.min = min;
        self
    }

    /// Set the maximum accepted length
    pub fn max_length(mut self, max: usize) -> Self {
        self.config.limits.max = max;
        self
    }

    /// Set both bounds at once
    pub fn limits(mut self, limits: LengthLimits) -> Self {
        self.config.limits = limits;
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<Config> {
        self.config.validate()?;
        Ok(self.config)
    }
}
