//! Error types for underlay
//!
//! The resolution and mounting path never fails: missing windows degrade to
//! null handles that propagate as no-ops. These types cover the fallible
//! ambient surfaces, configuration IO and logging setup.

use thiserror::Error;

/// Result type alias for underlay operations
pub type Result<T> = std::result::Result<T, UnderlayError>;

/// Main error type for underlay
#[derive(Error, Debug)]
pub enum UnderlayError {
    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),

    #[error("Logging error: {0}")]
    Logging(#[from] crate::logging::LoggingError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigError;

    #[test]
    fn conversions_preserve_the_message() {
        let err: UnderlayError = ConfigError::Invalid("bad knob".to_string()).into();
        assert!(err.to_string().contains("bad knob"));

        let err: UnderlayError =
            std::io::Error::new(std::io::ErrorKind::NotFound, "gone").into();
        assert!(matches!(err, UnderlayError::Io(_)));
    }
}
