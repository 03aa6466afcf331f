//! Error types for the brandscan library
//!
//! The classifiers themselves never fail for structurally valid input; these
//! errors exist at the boundary where signal bundles and configuration are
//! loaded from disk.

use thiserror::Error;

/// Result type alias for brandscan operations
pub type Result<T> = std::result::Result<T, BrandError>;

/// Error types for signal loading and configuration
#[derive(Error, Debug)]
pub enum BrandError {
    /// Signal bundle file could not be read or did not parse
    #[error("Failed to load signal bundle: {message}")]
    SignalLoad {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Configuration file could not be read, parsed, or written
    #[error("Configuration error: {message}")]
    Config {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Configuration value outside its valid range
    #[error("Invalid parameter: {parameter} = {value}")]
    InvalidParameter { parameter: String, value: String },
}

impl BrandError {
    /// Create a signal-load error with an underlying cause
    pub fn signal_load(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::SignalLoad {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a configuration error with an underlying cause
    pub fn config(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Config {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Get user-friendly error description for application display
    pub fn user_message(&self) -> String {
        match self {
            BrandError::SignalLoad { .. } => {
                "Could not load the extracted page signals. Please check the bundle file and try again."
                    .to_string()
            }
            BrandError::Config { .. } => {
                "Could not load the classifier configuration. Please check the config file syntax."
                    .to_string()
            }
            BrandError::InvalidParameter { parameter, value } => {
                format!(
                    "Configuration value '{}' is out of range: {}",
                    parameter, value
                )
            }
        }
    }
}
