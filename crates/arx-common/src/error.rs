//! Error types shared across the Arx workspace

use thiserror::Error;

/// Result type alias for Arx operations
pub type Result<T> = std::result::Result<T, ArxError>;

/// Common error type for infrastructure-level failures
#[derive(Error, Debug)]
pub enum ArxError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Logging initialization error: {0}")]
    LoggingInit(String),
}

impl ArxError {
    /// Configuration error with a formatted message
    pub fn config(message: impl Into<String>) -> Self {
        ArxError::Config(message.into())
    }
}
