//! Session persistence for the command-line remote

use std::path::PathBuf;

use smartcontrol_core::{Session, SessionStore, StorageError};

/// Keeps the signed-in user as a JSON file
#[derive(Debug, Clone)]
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl SessionStore for FileSessionStore {
    fn load(&self) -> Option<Session> {
        match std::fs::read_to_string(&self.path) {
            Ok(raw) => Session::from_json(&raw),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => None,
            Err(e) => {
                tracing::warn!("Failed to read session file {:?}: {}", self.path, e);
                None
            }
        }
    }

    fn save(&self, session: &Session) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| StorageError::Write(format!("{:?}: {}", parent, e)))?;
        }
        std::fs::write(&self.path, session.to_json())
            .map_err(|e| StorageError::Write(format!("{:?}: {}", self.path, e)))?;
        tracing::debug!("Session saved to {:?}", self.path);
        Ok(())
    }

    fn clear(&self) -> Result<(), StorageError> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => {
                tracing::debug!("Session file {:?} removed", self.path);
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StorageError::Write(format!("{:?}: {}", self.path, e))),
        }
    }
}
