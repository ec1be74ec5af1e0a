//! Error types for textgraph
//!
//! Normal query outcomes (an absent word, an unreachable target, an empty
//! graph) are modeled as result variants in their own modules, not as
//! errors. The error type here covers genuine failures only.

use thiserror::Error;

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, GraphError>;

/// Main error type for textgraph
#[derive(Error, Debug, Clone)]
pub enum GraphError {
    /// Configuration validation failed
    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {message}")]
    Serialization { message: String },
}

impl GraphError {
    /// Create an invalid config error
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Create a serialization error
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::Serialization {
            message: message.into(),
        }
    }
}

impl From<serde_json::Error> for GraphError {
    fn from(err: serde_json::Error) -> Self {
        Self::serialization(err.to_string())
    }
}
