//! Tests for configuration defaults, validation and storage.

use std::time::Duration;

use proptest::prelude::*;

use crate::config::{default_config_path, ConfigError, HostConfig, ResolverConfig};
use crate::desktop::RetryPolicy;

#[test]
fn defaults_match_the_retry_policy() {
    let config = ResolverConfig::default();
    assert_eq!(config.max_attempts, 10);
    assert_eq!(config.poll_interval_ms, 100);
    assert_eq!(RetryPolicy::from(&config), RetryPolicy::default());
}

#[test]
fn partial_json_fills_defaults() {
    let config: HostConfig =
        serde_json::from_str(r#"{"resolver":{"max_attempts":3}}"#).expect("parse");
    assert_eq!(config.resolver.max_attempts, 3);
    assert_eq!(config.resolver.poll_interval_ms, 100);
}

#[test]
fn empty_json_is_all_defaults() {
    let config: HostConfig = serde_json::from_str("{}").expect("parse");
    assert_eq!(config.resolver, ResolverConfig::default());
}

#[test]
fn validate_rejects_zero_attempts() {
    let mut config = HostConfig::default();
    config.resolver.max_attempts = 0;
    assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
}

#[test]
fn default_path_is_under_the_app_directory() {
    let path = default_config_path();
    assert!(path.ends_with("underlay/config.json"));
}

#[tokio::test]
async fn save_and_load_round_trip() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("config.json");

    let mut config = HostConfig::default();
    config.resolver.max_attempts = 7;
    config.resolver.poll_interval_ms = 50;
    config.save(&path).await.expect("save");

    let loaded = HostConfig::load(&path).await.expect("load");
    assert_eq!(loaded.resolver, config.resolver);
}

#[tokio::test]
async fn load_missing_file_is_not_found() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("missing.json");

    assert!(matches!(
        HostConfig::load(&path).await,
        Err(ConfigError::NotFound(_))
    ));
    let fallback = HostConfig::load_or_default(&path).await.expect("fallback");
    assert_eq!(fallback.resolver, ResolverConfig::default());
}

#[tokio::test]
async fn save_rejects_invalid_configuration() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("config.json");

    let mut config = HostConfig::default();
    config.resolver.max_attempts = 0;
    assert!(config.save(&path).await.is_err());
    assert!(!path.exists());
}

proptest! {
    /// Converting a resolver config to a retry policy preserves both
    /// fields exactly.
    #[test]
    fn retry_policy_conversion_preserves_fields(
        max_attempts in 1u32..1000,
        poll_interval_ms in 0u64..10_000
    ) {
        let config = ResolverConfig { max_attempts, poll_interval_ms };
        let policy = RetryPolicy::from(&config);
        prop_assert_eq!(policy.max_attempts, max_attempts);
        prop_assert_eq!(policy.poll_interval, Duration::from_millis(poll_interval_ms));
    }
}
