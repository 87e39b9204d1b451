use crate::storage::storage_keys;
use crate::{KeyValueStore, SessionStore, StorageResult};

use std::sync::Arc;

use log::{debug, warn};

/// Persisted credentials plus the session view derived from them.
///
/// Shared by the auth client, which writes through it, and the request
/// authenticator, which reads the token and may force a logout.
#[derive(Clone)]
pub struct CredentialStore {
    store: Arc<dyn KeyValueStore>,
    session: SessionStore,
}

impl CredentialStore {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        let session = SessionStore::new(Arc::clone(&store));
        Self { store, session }
    }

    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    pub fn store(&self) -> &dyn KeyValueStore {
        self.store.as_ref()
    }

    pub fn token(&self) -> Option<String> {
        self.store.get(storage_keys::TOKEN)
    }

    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }

    pub fn user_name(&self) -> Option<String> {
        self.store.get(storage_keys::USER_NAME)
    }

    pub fn user_email(&self) -> Option<String> {
        self.store.get(storage_keys::USER_EMAIL)
    }

    /// Avatar key, repairing entries written by older clients: a legacy
    /// avatar value that is not a URL or path is copied into the key slot.
    pub fn user_avatar_key(&self) -> Option<String> {
        if let Some(key) = self.store.get(storage_keys::USER_AVATAR_KEY) {
            return Some(key);
        }

        let legacy = self.store.get(storage_keys::USER_AVATAR_URL)?;
        let key = storage_keys::legacy_avatar_key(&legacy)?.to_string();

        match self.store.set(storage_keys::USER_AVATAR_KEY, &key) {
            Ok(()) => debug!("Migrated legacy avatar value to avatar key"),
            Err(e) => warn!("Failed to persist migrated avatar key: {e}"),
        }
        Some(key)
    }

    /// Replaces the stored identity after a successful login or register.
    /// Avatar slots from any earlier identity do not survive.
    pub(crate) fn establish(
        &self,
        token: &str,
        name: &str,
        email: &str,
        avatar_key: Option<&str>,
    ) -> StorageResult<()> {
        self.store.set(storage_keys::TOKEN, token)?;
        self.store.set(storage_keys::USER_NAME, name)?;
        self.store.set(storage_keys::USER_EMAIL, email)?;
        self.write_avatar_key(avatar_key)?;
        self.store.remove(storage_keys::USER_AVATAR_URL)
    }

    pub(crate) fn set_user_name(&self, name: &str) -> StorageResult<()> {
        self.store.set(storage_keys::USER_NAME, name)
    }

    pub(crate) fn set_user_email(&self, email: &str) -> StorageResult<()> {
        self.store.set(storage_keys::USER_EMAIL, email)
    }

    /// Sets the avatar key slot, or removes it for `None` and blank keys.
    pub(crate) fn write_avatar_key(&self, key: Option<&str>) -> StorageResult<()> {
        match key.filter(|k| !k.is_empty()) {
            Some(key) => self.store.set(storage_keys::USER_AVATAR_KEY, key),
            None => self.store.remove(storage_keys::USER_AVATAR_KEY),
        }
    }

    /// Republishes the session from storage.
    pub fn resync(&self) {
        self.session.resync_from_store();
    }

    /// Removes every session slot, legacy included, and publishes an
    /// anonymous session. Storage failures are logged, never raised.
    pub fn logout(&self) {
        if let Err(e) = self.store.clear(&storage_keys::ALL) {
            warn!("Failed to clear stored session entries: {e}");
        }
        self.session.clear();
        debug!("Session cleared");
    }
}
