//! Tests for logging configuration.

use std::path::PathBuf;

use crate::logging::{LogFormat, LogLevel, LogOutput, LoggingConfig};

#[test]
fn default_configuration() {
    let config = LoggingConfig::default();
    assert_eq!(config.level, LogLevel::Info);
    assert_eq!(config.format, LogFormat::Text);
    assert_eq!(config.output, LogOutput::Console);
    assert!(config.log_directory.is_none());
    assert!(config.include_target);
    assert!(!config.include_thread_id);
}

#[test]
fn builders_chain() {
    let config = LoggingConfig::new()
        .with_level(LogLevel::Debug)
        .with_format(LogFormat::Json)
        .with_output(LogOutput::File)
        .with_log_directory(PathBuf::from("/tmp/underlay-logs"))
        .with_module_level("underlay::desktop", LogLevel::Trace);

    assert_eq!(config.level, LogLevel::Debug);
    assert_eq!(config.format, LogFormat::Json);
    assert_eq!(config.output, LogOutput::File);
    assert_eq!(config.log_directory, Some(PathBuf::from("/tmp/underlay-logs")));
    assert_eq!(
        config.module_levels.get("underlay::desktop"),
        Some(&LogLevel::Trace)
    );
}

#[test]
fn presets() {
    let dev = LoggingConfig::development();
    assert_eq!(dev.level, LogLevel::Debug);
    assert_eq!(dev.output, LogOutput::Console);
    assert!(dev.include_file_info);

    let prod = LoggingConfig::production();
    assert_eq!(prod.format, LogFormat::Json);
    assert_eq!(prod.output, LogOutput::Both);
    assert!(prod.log_directory.is_some());
}

#[test]
fn level_mappings() {
    assert_eq!(LogLevel::Trace.as_str(), "trace");
    assert_eq!(LogLevel::Error.to_string(), "error");
    assert_eq!(LogLevel::Warn.to_tracing_level(), tracing::Level::WARN);
    assert_eq!(LogLevel::default(), LogLevel::Info);
}

#[test]
fn serde_uses_lowercase_names() {
    assert_eq!(
        serde_json::to_string(&LogLevel::Debug).expect("serialize"),
        "\"debug\""
    );
    let level: LogLevel = serde_json::from_str("\"warn\"").expect("parse");
    assert_eq!(level, LogLevel::Warn);

    let output: LogOutput = serde_json::from_str("\"both\"").expect("parse");
    assert_eq!(output, LogOutput::Both);
}
