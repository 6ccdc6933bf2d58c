//! Error types for spam-rs
//!
//! The classifiers themselves never fail. These errors come from the caller
//! layer (input validation) and from loading configuration or reference data.

use thiserror::Error;

/// Result type alias for spam-rs operations
pub type Result<T> = std::result::Result<T, SpamError>;

/// Spam detector error types
#[derive(Error, Debug)]
pub enum SpamError {
    /// Blank message or number handed to the service
    #[error("Empty input: please enter a {0} to analyze")]
    EmptyInput(&'static str),

    /// Phone number with too few digits after normalization
    #[error("Invalid number: {digits} digit(s) found, at least {min} required")]
    InvalidNumber { digits: usize, min: usize },

    /// Configuration or reference data error
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl SpamError {
    /// True for errors caused by caller input rather than the environment
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, SpamError::EmptyInput(_) | SpamError::InvalidNumber { .. })
    }
}
