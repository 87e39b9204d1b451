use crate::KeyValueStore;
use crate::storage::storage_keys;

use serde::Serialize;

/// Snapshot of the current auth identity and credential.
///
/// A missing token means anonymous, whatever the other fields hold.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Session {
    pub token: Option<String>,
    pub user_name: Option<String>,
    pub user_email: Option<String>,
    /// Opaque reference to an uploaded image, not a URL
    pub user_avatar_key: Option<String>,
}

impl Session {
    /// All-null session.
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// Avatar key to display: only meaningful while authenticated.
    pub fn visible_avatar_key(&self) -> Option<&str> {
        if self.is_authenticated() {
            self.user_avatar_key.as_deref()
        } else {
            None
        }
    }

    /// Reads every persisted slot. A legacy avatar value that qualifies as
    /// a key fills in for a missing avatar key; it is not written back here.
    pub fn read_from(store: &dyn KeyValueStore) -> Self {
        let user_avatar_key = store.get(storage_keys::USER_AVATAR_KEY).or_else(|| {
            store
                .get(storage_keys::USER_AVATAR_URL)
                .and_then(|legacy| storage_keys::legacy_avatar_key(&legacy).map(String::from))
        });

        Self {
            token: store.get(storage_keys::TOKEN),
            user_name: store.get(storage_keys::USER_NAME),
            user_email: store.get(storage_keys::USER_EMAIL),
            user_avatar_key,
        }
    }
}
