mod api_paths;
mod credential_store;

use crate::{KeyValueStore, MemoryStore};

use std::sync::Arc;

/// In-memory store seeded with `entries`, shared as the trait object the
/// clients take.
pub(crate) fn seeded_store(entries: &[(&str, &str)]) -> Arc<dyn KeyValueStore> {
    Arc::new(MemoryStore::with_entries(entries.iter().copied()))
}
