//! Exclusion configuration
//!
//! Declares per-dependency exclusions in a TOML file (default `depex.toml`):
//!
//! ```toml
//! [[dependency]]
//! id = "org.springframework:spring-core"
//! exclude = ["commons-logging:commons-logging"]
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::models::{Exclusion, Exclusions, ParseError};

/// Default config file name, resolved against the working directory
pub const DEFAULT_CONFIG_FILE: &str = "depex.toml";

/// Errors that can occur when loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("failed to read {path}: {source}")]
    Io {
        /// Path that was read
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Config file is not valid TOML for this schema
    #[error("invalid config: {0}")]
    Toml(#[from] toml::de::Error),

    /// Config could not be written as TOML
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// An exclusion coordinate could not be parsed
    #[error("invalid exclusion for {dependency}: {source}")]
    InvalidExclusion {
        /// Dependency id the exclusion was declared on
        dependency: String,
        /// Parse failure
        source: ParseError,
    },
}

/// Top-level exclusion configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExclusionConfig {
    /// Dependencies with declared exclusions
    #[serde(default, rename = "dependency")]
    pub dependencies: Vec<DependencyConfig>,
}

/// Exclusions declared on one dependency
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DependencyConfig {
    /// Dependency id (`group:artifact`)
    pub id: String,
    /// Excluded `group:artifact` coordinates; `*` matches any value
    #[serde(default)]
    pub exclude: Vec<String>,
}

impl ExclusionConfig {
    /// Parse configuration from a TOML string
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Load configuration from a file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        log::debug!("loading exclusions from {}", path.display());
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Render configuration as TOML
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Build the exclusion collection, validating every coordinate
    pub fn to_exclusions(&self) -> Result<Exclusions, ConfigError> {
        let mut exclusions = Exclusions::new();
        for dependency in &self.dependencies {
            let parsed = dependency
                .exclude
                .iter()
                .map(|coordinate| coordinate.parse::<Exclusion>())
                .collect::<Result<Vec<_>, _>>()
                .map_err(|source| ConfigError::InvalidExclusion {
                    dependency: dependency.id.clone(),
                    source,
                })?;
            exclusions.add(dependency.id.as_str(), parsed);
        }
        Ok(exclusions)
    }
}
