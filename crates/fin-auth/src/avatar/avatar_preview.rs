use crate::{FileTransferClient, PreviewFile, SessionStore, Subscription};

use std::path::PathBuf;
use std::sync::{Arc, Mutex, PoisonError};

use log::{debug, warn};
use tokio::sync::watch;
use tokio::task::JoinHandle;

#[derive(Default)]
struct Slot {
    file: Option<PreviewFile>,
    closed: bool,
}

impl Slot {
    /// Replaces the held preview; the previous one is released here.
    fn install(&mut self, file: Option<PreviewFile>) -> Option<PathBuf> {
        if self.closed {
            return None;
        }
        self.file = file;
        self.file.as_ref().map(|f| f.path().to_path_buf())
    }
}

/// Keeps a local copy of the signed-in user's avatar in step with the session.
///
/// Follows the avatar key of authenticated sessions, skipping repeats, and
/// downloads the newest key. A download still in flight when the key
/// changes is abandoned. Each preview is released exactly once: when a newer
/// value replaces it, when the download fails or the key goes away, or when
/// this value is dropped.
pub struct AvatarPreview {
    slot: Arc<Mutex<Slot>>,
    updates: watch::Receiver<Option<PathBuf>>,
    task: JoinHandle<()>,
    _subscription: Subscription,
}

impl AvatarPreview {
    /// Starts following `session`. Must be called within a tokio runtime.
    pub fn spawn(session: &SessionStore, files: FileTransferClient) -> Self {
        let (key_tx, key_rx) = watch::channel::<Option<String>>(None);
        let (update_tx, updates) = watch::channel::<Option<PathBuf>>(None);

        let subscription = session.subscribe(move |session| {
            let key = session.visible_avatar_key().map(String::from);
            key_tx.send_if_modified(|current| {
                if *current == key {
                    false
                } else {
                    *current = key;
                    true
                }
            });
        });

        let slot = Arc::new(Mutex::new(Slot::default()));
        let task = tokio::spawn(Self::run(key_rx, files, Arc::clone(&slot), update_tx));

        Self {
            slot,
            updates,
            task,
            _subscription: subscription,
        }
    }

    /// Path of the current preview, if any.
    pub fn current_path(&self) -> Option<PathBuf> {
        self.lock()
            .file
            .as_ref()
            .map(|f| f.path().to_path_buf())
    }

    /// Avatar key of the current preview, if any.
    pub fn current_key(&self) -> Option<String> {
        self.lock().file.as_ref().map(|f| f.key().to_string())
    }

    /// Notified each time a preview is installed or cleared.
    pub fn updates(&self) -> watch::Receiver<Option<PathBuf>> {
        self.updates.clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Slot> {
        self.slot.lock().unwrap_or_else(PoisonError::into_inner)
    }

    async fn run(
        mut keys: watch::Receiver<Option<String>>,
        files: FileTransferClient,
        slot: Arc<Mutex<Slot>>,
        updates: watch::Sender<Option<PathBuf>>,
    ) {
        let install = |file: Option<PreviewFile>| {
            let path = slot
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .install(file);
            updates.send_replace(path);
        };

        loop {
            let key = keys.borrow_and_update().clone();

            match key {
                None => install(None),
                Some(key) => {
                    tokio::select! {
                        result = files.download_by_key(&key) => {
                            let file = match result {
                                Ok(bytes) => PreviewFile::create(&key, &bytes)
                                    .map_err(|e| warn!("Failed to store avatar preview: {e}"))
                                    .ok(),
                                Err(e) => {
                                    debug!("Avatar download failed, showing none: {e}");
                                    None
                                }
                            };
                            install(file);
                        }
                        changed = keys.changed() => {
                            if changed.is_err() {
                                break;
                            }
                            debug!("Avatar key changed during download; switching");
                            continue;
                        }
                    }
                }
            }

            if keys.changed().await.is_err() {
                break;
            }
        }
    }
}

impl Drop for AvatarPreview {
    fn drop(&mut self) {
        self.task.abort();
        let mut slot = self.lock();
        slot.closed = true;
        slot.file = None;
    }
}
