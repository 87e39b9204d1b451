use crate::{
    ApiTransport, AuthClient, AuthResult, CredentialStore, FileTransferClient, KeyValueStore,
    Navigator, RequestAuthenticator, SessionStore,
};

use std::sync::Arc;
use std::time::Duration;

/// The clients of one API endpoint, sharing storage, session and
/// authenticator.
#[derive(Clone)]
pub struct ApiContext {
    pub auth: AuthClient,
    pub files: FileTransferClient,
    pub credentials: CredentialStore,
}

impl ApiContext {
    pub fn new(
        base_url: &str,
        timeout: Duration,
        store: Arc<dyn KeyValueStore>,
        navigator: Arc<dyn Navigator>,
    ) -> AuthResult<Self> {
        let credentials = CredentialStore::new(store);
        let authenticator = RequestAuthenticator::new(credentials.clone(), navigator);
        let transport = Arc::new(ApiTransport::new(base_url, timeout, authenticator)?);

        Ok(Self {
            auth: AuthClient::new(Arc::clone(&transport), credentials.clone()),
            files: FileTransferClient::new(transport),
            credentials,
        })
    }

    pub fn session(&self) -> &SessionStore {
        self.credentials.session()
    }
}
