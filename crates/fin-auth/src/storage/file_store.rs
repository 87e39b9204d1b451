use crate::{KeyValueStore, StorageError, StorageResult};

use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

use log::{debug, warn};

type Entries = BTreeMap<String, String>;

/// JSON-file backed store.
///
/// Every write rewrites the whole file through a temp file, fsync and
/// rename, so a crash leaves either the old or the new contents on disk.
/// Entries written by separate calls are not atomic as a group.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads all entries. Missing, unreadable or corrupted files read as empty.
    fn read_entries(&self) -> Entries {
        if !self.path.exists() {
            return Entries::new();
        }

        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) => {
                warn!("Failed to read storage file {:?}: {e}", self.path);
                return Entries::new();
            }
        };

        if contents.trim().is_empty() {
            return Entries::new();
        }

        match serde_json::from_str::<Entries>(&contents) {
            Ok(entries) => entries,
            Err(e) => {
                warn!("Storage file {:?} is corrupted: {e}", self.path);
                Entries::new()
            }
        }
    }

    fn write_entries(&self, entries: &Entries) -> StorageResult<()> {
        if let Some(dir) = self.path.parent()
            && !dir.as_os_str().is_empty()
        {
            fs::create_dir_all(dir).map_err(|e| StorageError::io(dir.to_path_buf(), e))?;
        }

        let json = serde_json::to_string_pretty(entries)?;

        let file_name = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| String::from("storage.json"));
        let temp_path = self
            .path
            .with_file_name(format!("{file_name}.tmp.{}", std::process::id()));

        {
            let mut file = fs::File::create(&temp_path)
                .map_err(|e| StorageError::io(temp_path.clone(), e))?;

            file.write_all(json.as_bytes())
                .map_err(|e| StorageError::io(temp_path.clone(), e))?;

            file.sync_all()
                .map_err(|e| StorageError::io(temp_path.clone(), e))?;
        }

        fs::rename(&temp_path, &self.path).map_err(|e| {
            let _ = fs::remove_file(&temp_path);
            StorageError::atomic_rename(temp_path.clone(), self.path.clone(), e)
        })?;

        debug!("Wrote {} storage entries to {:?}", entries.len(), self.path);
        Ok(())
    }

    fn update<F>(&self, mutate: F) -> StorageResult<()>
    where
        F: FnOnce(&mut Entries) -> bool,
    {
        let _guard = self.write_lock.lock().unwrap_or_else(PoisonError::into_inner);
        let mut entries = self.read_entries();
        if mutate(&mut entries) {
            self.write_entries(&entries)?;
        }
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.read_entries().remove(key)
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        self.update(|entries| {
            entries.insert(key.to_string(), value.to_string());
            true
        })
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        self.update(|entries| entries.remove(key).is_some())
    }

    fn clear(&self, keys: &[&str]) -> StorageResult<()> {
        self.update(|entries| {
            let before = entries.len();
            entries.retain(|k, _| !keys.contains(&k.as_str()));
            entries.len() != before
        })
    }
}
