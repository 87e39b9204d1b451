use crate::StorageResult;

/// Durable string-keyed storage backing the session.
///
/// `get` fails soft: any access problem is reported as a missing value.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;

    fn set(&self, key: &str, value: &str) -> StorageResult<()>;

    fn remove(&self, key: &str) -> StorageResult<()>;

    /// Removes every listed key.
    fn clear(&self, keys: &[&str]) -> StorageResult<()>;
}
