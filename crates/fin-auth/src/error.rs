use crate::{ApiFailure, StorageError};

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

/// Errors returned by the auth and file clients
#[derive(Error, Debug)]
pub enum AuthError {
    #[error("User is not authenticated {location}")]
    NotAuthenticated { location: ErrorLocation },

    /// The failed exchange, unmodified
    #[error(transparent)]
    Api(#[from] ApiFailure),

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error("Invalid upload: {message} {location}")]
    InvalidUpload {
        message: String,
        location: ErrorLocation,
    },

    #[error("HTTP client setup failed: {source} {location}")]
    ClientSetup {
        #[source]
        source: reqwest::Error,
        location: ErrorLocation,
    },
}

impl AuthError {
    /// Creates NotAuthenticated error at caller location.
    #[track_caller]
    pub fn not_authenticated() -> Self {
        Self::NotAuthenticated {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Creates InvalidUpload error at caller location.
    #[track_caller]
    pub fn invalid_upload(message: impl Into<String>) -> Self {
        Self::InvalidUpload {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Creates ClientSetup error at caller location.
    #[track_caller]
    pub fn client_setup(source: reqwest::Error) -> Self {
        Self::ClientSetup {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Logs a failed network operation and wraps the failure untouched.
    pub(crate) fn from_failed(operation: &str, failure: ApiFailure) -> Self {
        log::error!("{operation} error: {failure}");
        Self::Api(failure)
    }

    /// The failed HTTP exchange, if this error came from one.
    pub fn failure(&self) -> Option<&ApiFailure> {
        match self {
            Self::Api(failure) => Some(failure),
            _ => None,
        }
    }

    /// HTTP status of the failed exchange, if any.
    pub fn status(&self) -> Option<u16> {
        self.failure().and_then(|f| f.status)
    }
}

pub type Result<T> = std::result::Result<T, AuthError>;
