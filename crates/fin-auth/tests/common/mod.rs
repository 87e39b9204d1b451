#![allow(dead_code)]

use fin_auth::storage::storage_keys;
use fin_auth::{ApiContext, KeyValueStore, MemoryStore, Navigator};

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use wiremock::MockServer;

pub const TOKEN: &str = "tok-1";

#[derive(Default)]
pub struct RecordingNavigator {
    redirects: AtomicUsize,
}

impl RecordingNavigator {
    pub fn redirects(&self) -> usize {
        self.redirects.load(Ordering::SeqCst)
    }
}

impl Navigator for RecordingNavigator {
    fn redirect_to_login(&self) {
        self.redirects.fetch_add(1, Ordering::SeqCst);
    }
}

pub struct Harness {
    pub server: MockServer,
    pub store: Arc<MemoryStore>,
    pub navigator: Arc<RecordingNavigator>,
    pub api: ApiContext,
}

impl Harness {
    /// Fresh mock server and an empty store.
    pub async fn start() -> Self {
        Self::with_entries(&[]).await
    }

    /// Mock server and a store holding a signed-in user.
    pub async fn signed_in() -> Self {
        Self::with_entries(&[
            (storage_keys::TOKEN, TOKEN),
            (storage_keys::USER_NAME, "Bob"),
            (storage_keys::USER_EMAIL, "b@x.com"),
        ])
        .await
    }

    pub async fn with_entries(entries: &[(&str, &str)]) -> Self {
        let server = MockServer::start().await;
        let store = Arc::new(MemoryStore::with_entries(entries.iter().copied()));
        let navigator = Arc::new(RecordingNavigator::default());

        let api = ApiContext::new(
            &format!("{}/api", server.uri()),
            Duration::from_secs(5),
            store.clone(),
            navigator.clone(),
        )
        .unwrap();

        Self {
            server,
            store,
            navigator,
            api,
        }
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.store.get(key)
    }

    pub async fn requests_received(&self) -> usize {
        self.server
            .received_requests()
            .await
            .map(|r| r.len())
            .unwrap_or(0)
    }
}

/// Context pointed at an address nothing listens on, for tests that never
/// reach the network.
pub fn offline(entries: &[(&str, &str)]) -> (ApiContext, Arc<MemoryStore>, Arc<RecordingNavigator>) {
    let store = Arc::new(MemoryStore::with_entries(entries.iter().copied()));
    let navigator = Arc::new(RecordingNavigator::default());
    let api = ApiContext::new(
        "http://127.0.0.1:9/api",
        Duration::from_secs(1),
        store.clone(),
        navigator.clone(),
    )
    .unwrap();
    (api, store, navigator)
}
