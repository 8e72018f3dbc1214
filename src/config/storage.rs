//! JSON file storage for [`HostConfig`].
//!
//! Writes go through a temp file and an atomic rename so a crash mid-save
//! never leaves a torn configuration behind.

use std::path::{Path, PathBuf};

use thiserror::Error;

use super::HostConfig;

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration file not found: {0}")]
    NotFound(PathBuf),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Configuration result type
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Default config location under the platform config directory.
pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("underlay")
        .join("config.json")
}

impl HostConfig {
    /// Load and validate the configuration file at `path`.
    pub async fn load(path: &Path) -> ConfigResult<Self> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }
        let content = tokio::fs::read_to_string(path).await?;
        let config: HostConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load the configuration file at `path`, falling back to defaults when
    /// it does not exist yet.
    pub async fn load_or_default(path: &Path) -> ConfigResult<Self> {
        match Self::load(path).await {
            Err(ConfigError::NotFound(_)) => Ok(Self::default()),
            other => other,
        }
    }

    /// Save to `path` with an atomic temp-file rename.
    pub async fn save(&self, path: &Path) -> ConfigResult<()> {
        self.validate()?;
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        let content = serde_json::to_string_pretty(self)?;
        let temp_path = path.with_extension("json.tmp");
        tokio::fs::write(&temp_path, &content).await?;
        tokio::fs::rename(&temp_path, path).await?;
        Ok(())
    }
}
