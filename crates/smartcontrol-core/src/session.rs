//! Signed-in session and its persistence
//!
//! The session is loaded once when the dashboard starts, handed to it
//! explicitly, and cleared on logout. Stores only persist the user object
//! itself, serialized as JSON under [`SESSION_KEY`].

use std::sync::Mutex;

use crate::error::StorageError;
use crate::model::User;

/// Storage key under which the serialized user is kept
pub const SESSION_KEY: &str = "user";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub user: User,
}

impl Session {
    pub fn new(user: User) -> Self {
        Self { user }
    }

    /// Parse a stored user object, treating anything unreadable as no session
    pub fn from_json(raw: &str) -> Option<Self> {
        match serde_json::from_str::<User>(raw) {
            Ok(user) => Some(Self { user }),
            Err(e) => {
                tracing::debug!("Ignoring unreadable stored session: {}", e);
                None
            }
        }
    }

    pub fn to_json(&self) -> String {
        // A User only holds strings and integers, which always serialize.
        serde_json::to_string(&self.user).unwrap_or_default()
    }
}

/// Persistent home of the session between visits
pub trait SessionStore {
    fn load(&self) -> Option<Session>;

    fn save(&self, session: &Session) -> Result<(), StorageError>;

    fn clear(&self) -> Result<(), StorageError>;
}

/// In-memory store holding the raw serialized value
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    raw: Mutex<Option<String>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_session(session: &Session) -> Self {
        Self {
            raw: Mutex::new(Some(session.to_json())),
        }
    }

    /// Raw stored value, as another reader of the store would see it
    pub fn raw(&self) -> Option<String> {
        self.raw.lock().ok().and_then(|raw| raw.clone())
    }
}

impl SessionStore for MemorySessionStore {
    fn load(&self) -> Option<Session> {
        self.raw().as_deref().and_then(Session::from_json)
    }

    fn save(&self, session: &Session) -> Result<(), StorageError> {
        let mut raw = self
            .raw
            .lock()
            .map_err(|e| StorageError::Unavailable(e.to_string()))?;
        *raw = Some(session.to_json());
        Ok(())
    }

    fn clear(&self) -> Result<(), StorageError> {
        let mut raw = self
            .raw
            .lock()
            .map_err(|e| StorageError::Unavailable(e.to_string()))?;
        *raw = None;
        Ok(())
    }
}
