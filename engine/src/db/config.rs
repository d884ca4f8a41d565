//! Repository configuration file support.
//!
//! This module provides utilities for reading repository configuration from
//! TOML configuration files or the environment.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use super::repository::RepositoryError;

/// Repository type configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepositoryType {
    /// In-memory backend
    Local,
}

impl RepositoryType {
    /// Parse repository type from string.
    ///
    /// # Arguments
    /// * `s` - String representation ("local")
    ///
    /// # Returns
    /// * `Ok(RepositoryType)` if valid
    /// * `Err` if invalid
    pub fn parse(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "local" => Ok(Self::Local),
            _ => Err(format!("Unknown repository type: {}", s)),
        }
    }

    /// Get repository type from environment variable.
    ///
    /// Reads `REPOSITORY_TYPE`. Defaults to Local if not set or invalid.
    pub fn from_env() -> Self {
        std::env::var("REPOSITORY_TYPE")
            .ok()
            .and_then(|s| Self::parse(&s).ok())
            .unwrap_or(Self::Local)
    }
}

/// Repository configuration from file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepositoryConfig {
    pub repository: RepositorySettings,
    #[serde(default)]
    pub database: DatabaseSettings,
}

/// Repository type settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepositorySettings {
    #[serde(rename = "type")]
    pub repo_type: String,
}

/// Database connection settings, unused by the in-memory backend but kept in
/// the file shape so a SQL backend can be configured without migration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DatabaseSettings {
    #[serde(default)]
    pub server: String,
    #[serde(default)]
    pub database: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

impl RepositoryConfig {
    /// Read configuration from a TOML file.
    ///
    /// # Arguments
    /// * `path` - Path to the configuration file
    ///
    /// # Returns
    /// * `Ok(RepositoryConfig)` - Parsed configuration
    /// * `Err(RepositoryError::ConfigurationError)` - On read or parse failure
    pub fn from_file(path: &Path) -> Result<Self, RepositoryError> {
        let contents = fs::read_to_string(path).map_err(|e| {
            RepositoryError::ConfigurationError(format!(
                "Failed to read config file {}: {}",
                path.display(),
                e
            ))
        })?;
        toml::from_str(&contents).map_err(|e| {
            RepositoryError::ConfigurationError(format!(
                "Failed to parse config file {}: {}",
                path.display(),
                e
            ))
        })
    }

    /// Resolve the configured repository type.
    pub fn repository_type(&self) -> Result<RepositoryType, RepositoryError> {
        RepositoryType::parse(&self.repository.repo_type)
            .map_err(RepositoryError::ConfigurationError)
    }
}
