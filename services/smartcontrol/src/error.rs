//! Error types for the SmartControl+ service

use smartcontrol_core::{StorageError, TransportError};

/// Errors that can occur in the SmartControl+ service
#[derive(Debug, thiserror::Error)]
pub enum SmartControlError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("HTTP request failed: {0}")]
    Http(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Session error: {0}")]
    Session(#[from] StorageError),

    #[error("Server error: {0}")]
    Server(String),
}

impl From<SmartControlError> for TransportError {
    fn from(e: SmartControlError) -> Self {
        match e {
            SmartControlError::Json(e) => TransportError::Decode(e.to_string()),
            other => TransportError::Network(other.to_string()),
        }
    }
}

/// Result type alias for SmartControl+ operations
pub type Result<T> = std::result::Result<T, SmartControlError>;
