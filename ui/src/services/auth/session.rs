use gloo_storage::{LocalStorage, Storage};
use tracing::info;

use super::{SessionStoreError, SignUpSession};

/// Storage key the rest of the front end reads the signed-in session from
pub const SESSION_STORAGE_KEY: &str = "pineappl_session";

/// Hands the session created at sign-up over to the rest of the front end
///
/// Backed by localStorage so the user stays signed in across tabs.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionStore {
    storage_key: String,
}

impl SessionStore {
    pub fn new(storage_key: &str) -> Self {
        Self {
            storage_key: storage_key.to_string(),
        }
    }

    pub fn storage_key(&self) -> &str {
        &self.storage_key
    }

    pub fn store(&self, session: &SignUpSession) -> Result<(), SessionStoreError> {
        LocalStorage::set(&self.storage_key, session).map_err(|e| SessionStoreError::Storage {
            key: self.storage_key.clone(),
            message: e.to_string(),
        })?;

        info!("Stored session for user {}", session.user_id);
        Ok(())
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new(SESSION_STORAGE_KEY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Storage itself is browser-only; these cover key selection

    #[test]
    fn test_default_store_uses_shared_session_key() {
        assert_eq!(SessionStore::default().storage_key(), "pineappl_session");
    }

    #[test]
    fn test_custom_key_is_kept() {
        let store = SessionStore::new("pineappl_session_test");
        assert_eq!(store.storage_key(), "pineappl_session_test");
        assert_ne!(store, SessionStore::default());
    }
}
