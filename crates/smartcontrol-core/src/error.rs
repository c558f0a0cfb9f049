//! Error types shared by every driver

/// A request that never produced a usable reply
///
/// Backend-reported failures (`success: false`) are not transport errors;
/// they arrive as regular responses.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransportError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Unexpected response: {0}")]
    Decode(String),
}

impl From<serde_json::Error> for TransportError {
    fn from(e: serde_json::Error) -> Self {
        TransportError::Decode(e.to_string())
    }
}

/// Errors raised by a [`crate::SessionStore`]
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("Session storage unavailable: {0}")]
    Unavailable(String),

    #[error("Failed to write session: {0}")]
    Write(String),
}
