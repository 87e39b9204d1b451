use crate::http::api_paths;
use crate::{ApiFailure, CredentialStore, FailureClassifier, Navigator};

use std::sync::Arc;

use log::{debug, warn};
use reqwest::Request;
use reqwest::header::{AUTHORIZATION, HeaderValue};

/// How an outgoing request ended up authenticated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Credential {
    /// Bearer token attached by the authenticator
    Attached,
    /// Caller set its own Authorization header
    CallerSupplied,
    /// Sent without credentials
    Anonymous,
}

/// Attaches the bearer token to outgoing requests and tears the session
/// down when a request it authenticated is rejected.
#[derive(Clone)]
pub struct RequestAuthenticator {
    credentials: CredentialStore,
    navigator: Arc<dyn Navigator>,
}

impl RequestAuthenticator {
    pub fn new(credentials: CredentialStore, navigator: Arc<dyn Navigator>) -> Self {
        Self {
            credentials,
            navigator,
        }
    }

    /// Adds `Authorization: Bearer <token>` unless the caller already set
    /// an Authorization header or no token is stored.
    pub fn authorize(&self, request: &mut Request) -> Credential {
        if request.headers().contains_key(AUTHORIZATION) {
            return Credential::CallerSupplied;
        }

        let Some(token) = self.credentials.token() else {
            return Credential::Anonymous;
        };

        match HeaderValue::from_str(&format!("Bearer {token}")) {
            Ok(mut value) => {
                value.set_sensitive(true);
                request.headers_mut().insert(AUTHORIZATION, value);
                Credential::Attached
            }
            Err(_) => {
                warn!("Stored token is not a valid header value; sending request anonymously");
                Credential::Anonymous
            }
        }
    }

    /// Forces logout and redirects to login when this request carried our
    /// token, was rejected with 401/403, and is not a login/register call.
    /// Returns whether the session was torn down. The failure itself is
    /// left for the caller to propagate.
    pub fn on_failure(&self, credential: Credential, failure: &ApiFailure) -> bool {
        if credential != Credential::Attached
            || !FailureClassifier::is_unauthorized(failure)
            || api_paths::is_auth_excluded(&failure.url)
        {
            debug!(
                "Request failure left session intact ({credential:?}, status {:?})",
                failure.status
            );
            return false;
        }

        warn!(
            "Session rejected by {} (status {:?}); logging out",
            failure.url, failure.status
        );
        self.credentials.logout();
        self.navigator.redirect_to_login();
        true
    }
}
