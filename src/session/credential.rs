//! Credential store: the single persistent bearer-token slot

use crate::error::StorageError;
use crate::storage::LocalStorage;

/// Well-known key of the token slot
pub const TOKEN_KEY: &str = "recruit_token";

/// A single-slot store for the current bearer token.
///
/// No validation happens here. Only [`Session`](super::Session) writes to
/// it; everything else may read.
pub trait CredentialStore: Send + Sync {
    /// Store `token`, replacing any existing one
    fn save(&self, token: &str) -> Result<(), StorageError>;

    /// The stored token, if any
    fn load(&self) -> Result<Option<String>, StorageError>;

    /// Remove the stored token
    fn clear(&self) -> Result<(), StorageError>;
}

/// Credential store backed by origin-scoped [`LocalStorage`]
pub struct LocalCredentialStore {
    storage: LocalStorage,
}

impl LocalCredentialStore {
    pub fn new(storage: LocalStorage) -> Self {
        Self { storage }
    }

    /// Underlying storage (for status reporting)
    pub fn storage(&self) -> &LocalStorage {
        &self.storage
    }
}

impl CredentialStore for LocalCredentialStore {
    fn save(&self, token: &str) -> Result<(), StorageError> {
        self.storage.set(TOKEN_KEY, token)
    }

    fn load(&self) -> Result<Option<String>, StorageError> {
        self.storage.get(TOKEN_KEY)
    }

    fn clear(&self) -> Result<(), StorageError> {
        self.storage.remove(TOKEN_KEY).map(|_| ())
    }
}

/// In-memory credential store for tests
#[cfg(test)]
#[derive(Default)]
pub struct MemoryCredentialStore {
    slot: std::sync::Mutex<Option<String>>,
}

#[cfg(test)]
impl MemoryCredentialStore {
    pub fn with_token(token: &str) -> Self {
        Self {
            slot: std::sync::Mutex::new(Some(token.to_string())),
        }
    }
}

#[cfg(test)]
impl CredentialStore for MemoryCredentialStore {
    fn save(&self, token: &str) -> Result<(), StorageError> {
        *self.slot.lock().unwrap() = Some(token.to_string());
        Ok(())
    }

    fn load(&self) -> Result<Option<String>, StorageError> {
        Ok(self.slot.lock().unwrap().clone())
    }

    fn clear(&self) -> Result<(), StorageError> {
        *self.slot.lock().unwrap() = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn local_store() -> (LocalCredentialStore, TempDir) {
        let dir = TempDir::new().unwrap();
        let storage = LocalStorage::open_at(dir.path(), "test-origin").unwrap();
        (LocalCredentialStore::new(storage), dir)
    }

    #[test]
    fn test_local_store_lifecycle() {
        let (store, _dir) = local_store();
        assert!(store.load().unwrap().is_none());

        store.save("first").unwrap();
        assert_eq!(store.load().unwrap().as_deref(), Some("first"));

        store.save("second").unwrap();
        assert_eq!(store.load().unwrap().as_deref(), Some("second"));

        store.clear().unwrap();
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn test_clear_when_empty_is_ok() {
        let (store, _dir) = local_store();
        store.clear().unwrap();
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn test_uses_well_known_key() {
        let (store, _dir) = local_store();
        store.save("tok").unwrap();
        assert_eq!(
            store.storage().get(TOKEN_KEY).unwrap().as_deref(),
            Some("tok")
        );
    }
}
