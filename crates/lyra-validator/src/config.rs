//! Validator configuration

use std::path::Path;

use lyra_domain::TypeName;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read config file
    #[error("Failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    /// Failed to parse TOML
    #[error("Failed to parse config TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// Failed to serialize TOML
    #[error("Failed to serialize config TOML: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    /// Invalid setting
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Configuration for batch relationship validation
///
/// Single-relationship validation always stops at the first failure; these
/// settings only control how failures are collected across relationships
/// and types.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidatorConfig {
    /// Stop the whole pass at the first failing relationship
    #[serde(default)]
    pub fail_fast: bool,

    /// Maximum number of issues to collect (0 means unlimited)
    #[serde(default = "default_max_issues")]
    pub max_issues: usize,

    /// Declaring types whose relationships are not checked
    #[serde(default)]
    pub skip_types: Vec<String>,
}

fn default_max_issues() -> usize {
    100
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            fail_fast: false,
            max_issues: default_max_issues(),
            skip_types: Vec::new(),
        }
    }
}

impl ValidatorConfig {
    /// Stop at the first failure
    pub fn strict() -> Self {
        Self {
            fail_fast: true,
            max_issues: 0,
            skip_types: Vec::new(),
        }
    }

    /// Collect every failure, without a cap
    pub fn exhaustive() -> Self {
        Self {
            fail_fast: false,
            max_issues: 0,
            skip_types: Vec::new(),
        }
    }

    /// Check that skipped types are valid type names
    pub fn validate(&self) -> Result<(), ConfigError> {
        for name in &self.skip_types {
            TypeName::new(name.as_str()).map_err(ConfigError::Invalid)?;
        }
        Ok(())
    }

    /// Whether relationships declared on `type_name` are skipped
    pub fn skips(&self, type_name: &TypeName) -> bool {
        self.skip_types.iter().any(|s| s == type_name.as_str())
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: ValidatorConfig = toml::from_str(toml_str)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }
}
