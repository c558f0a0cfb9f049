//! Session persisted in the browser's `localStorage`

use smartcontrol_core::{Session, SessionStore, StorageError};

#[cfg(all(feature = "csr", target_arch = "wasm32"))]
use smartcontrol_core::SESSION_KEY;

/// Keeps the signed-in user under the `user` key of `localStorage`
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalStorageSessionStore;

#[cfg(all(feature = "csr", target_arch = "wasm32"))]
fn local_storage() -> Result<web_sys::Storage, StorageError> {
    let window = web_sys::window().ok_or_else(|| StorageError::Unavailable("no window".to_string()))?;
    window
        .local_storage()
        .map_err(|e| StorageError::Unavailable(format!("{:?}", e)))?
        .ok_or_else(|| StorageError::Unavailable("localStorage is disabled".to_string()))
}

impl SessionStore for LocalStorageSessionStore {
    fn load(&self) -> Option<Session> {
        #[cfg(all(feature = "csr", target_arch = "wasm32"))]
        {
            let raw = local_storage().ok()?.get_item(SESSION_KEY).ok()??;
            Session::from_json(&raw)
        }

        #[cfg(not(all(feature = "csr", target_arch = "wasm32")))]
        {
            None
        }
    }

    fn save(&self, session: &Session) -> Result<(), StorageError> {
        #[cfg(all(feature = "csr", target_arch = "wasm32"))]
        {
            local_storage()?
                .set_item(SESSION_KEY, &session.to_json())
                .map_err(|e| StorageError::Write(format!("{:?}", e)))
        }

        #[cfg(not(all(feature = "csr", target_arch = "wasm32")))]
        {
            let _ = session;
            Err(StorageError::Unavailable("no browser storage".to_string()))
        }
    }

    fn clear(&self) -> Result<(), StorageError> {
        #[cfg(all(feature = "csr", target_arch = "wasm32"))]
        {
            local_storage()?
                .remove_item(SESSION_KEY)
                .map_err(|e| StorageError::Write(format!("{:?}", e)))
        }

        #[cfg(not(all(feature = "csr", target_arch = "wasm32")))]
        {
            Ok(())
        }
    }
}
