//! Host configuration.
//!
//! Plain serde structs with defaulted fields plus JSON file storage. Only
//! tuning knobs live here; the shell protocol constants (class names,
//! message payloads, broadcast parameters) are fixed and not configurable.

mod storage;

#[cfg(test)]
mod tests;

pub use storage::{default_config_path, ConfigError, ConfigResult};

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::desktop::RetryPolicy;
use crate::logging::LoggingConfig;

/// Top-level host configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct HostConfig {
    /// Surface resolution tuning.
    #[serde(default)]
    pub resolver: ResolverConfig,

    /// Logging preferences.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Tuning for the surface resolver's polling fallback.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolverConfig {
    /// Maximum direct-lookup attempts before giving up.
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,

    /// Pause between failed attempts, in milliseconds.
    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,
}

fn default_max_attempts() -> u32 {
    10
}

fn default_poll_interval_ms() -> u64 {
    100
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            max_attempts: default_max_attempts(),
            poll_interval_ms: default_poll_interval_ms(),
        }
    }
}

impl From<&ResolverConfig> for RetryPolicy {
    fn from(config: &ResolverConfig) -> Self {
        Self {
            max_attempts: config.max_attempts,
            poll_interval: Duration::from_millis(config.poll_interval_ms),
        }
    }
}

impl HostConfig {
    /// Check invariants that serde cannot express.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.resolver.max_attempts == 0 {
            return Err(ConfigError::Invalid(
                "resolver.max_attempts must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
