//! Structured logging setup.
//!
//! A tracing-subscriber registry with an environment filter derived from
//! the configuration, writing to the console, a daily-rolling file, or
//! both. The handle returned by [`init`] owns the file appender guards and
//! must stay alive for the lifetime of the process.

mod config;

#[cfg(test)]
mod tests;

pub use config::{LogFormat, LogLevel, LogOutput, LoggingConfig};

use std::path::PathBuf;

use thiserror::Error;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Logging system errors
#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("Failed to initialize logging: {0}")]
    Initialization(String),

    #[error("Failed to create log directory: {0}")]
    DirectoryCreation(String),
}

/// Result type for logging operations
pub type LoggingResult<T> = Result<T, LoggingError>;

/// Keeps the non-blocking file appender guards alive.
pub struct LoggingHandle {
    _guards: Vec<WorkerGuard>,
}

/// Initialize the global tracing subscriber from `config`.
pub fn init(config: &LoggingConfig) -> LoggingResult<LoggingHandle> {
    let env_filter = build_env_filter(config);
    let registry = tracing_subscriber::registry().with(env_filter);
    let mut guards = Vec::new();

    match config.output {
        LogOutput::Console => {
            registry
                .with(console_layer(config))
                .try_init()
                .map_err(|e| LoggingError::Initialization(e.to_string()))?;
        }
        LogOutput::File => {
            let (file, guard) = file_layer(config)?;
            guards.push(guard);
            registry
                .with(file)
                .try_init()
                .map_err(|e| LoggingError::Initialization(e.to_string()))?;
        }
        LogOutput::Both => {
            let (file, guard) = file_layer(config)?;
            guards.push(guard);
            registry
                .with(console_layer(config))
                .with(file)
                .try_init()
                .map_err(|e| LoggingError::Initialization(e.to_string()))?;
        }
    }

    Ok(LoggingHandle { _guards: guards })
}

/// Build environment filter from configuration
fn build_env_filter(config: &LoggingConfig) -> EnvFilter {
    let mut filter = EnvFilter::new(config.level.as_str());
    for (module, level) in &config.module_levels {
        filter = filter.add_directive(
            format!("{}={}", module, level.as_str())
                .parse()
                .unwrap_or_else(|_| config.level.to_tracing_level().into()),
        );
    }
    filter
}

/// Create console logging layer
fn console_layer<S>(config: &LoggingConfig) -> impl Layer<S>
where
    S: tracing::Subscriber + for<'a> tracing_subscriber::registry::LookupSpan<'a>,
{
    let layer = fmt::layer()
        .with_target(config.include_target)
        .with_thread_ids(config.include_thread_id)
        .with_file(config.include_file_info)
        .with_line_number(config.include_file_info);

    if config.format == LogFormat::Json {
        layer.json().boxed()
    } else {
        layer.boxed()
    }
}

/// Create file logging layer with daily rotation
fn file_layer<S>(config: &LoggingConfig) -> LoggingResult<(impl Layer<S>, WorkerGuard)>
where
    S: tracing::Subscriber + for<'a> tracing_subscriber::registry::LookupSpan<'a>,
{
    let log_dir = config
        .log_directory
        .clone()
        .unwrap_or_else(|| PathBuf::from("logs"));
    std::fs::create_dir_all(&log_dir)
        .map_err(|e| LoggingError::DirectoryCreation(format!("{:?}: {}", log_dir, e)))?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, "underlay.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let layer = fmt::layer()
        .with_writer(non_blocking)
        .with_target(config.include_target)
        .with_thread_ids(config.include_thread_id)
        .with_file(config.include_file_info)
        .with_line_number(config.include_file_info)
        .with_ansi(false);

    if config.format == LogFormat::Json {
        Ok((layer.json().boxed(), guard))
    } else {
        Ok((layer.boxed(), guard))
    }
}
