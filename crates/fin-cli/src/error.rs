use fin_auth::{AuthError, FailureClassifier, MessageOverrides};
use fin_config::ConfigError;

use std::panic::Location;
use std::path::PathBuf;

use error_location::ErrorLocation;
use thiserror::Error;

/// Errors reported by the `fin` binary
#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// User-facing message chosen for a failed client call
    #[error("{message}")]
    Api {
        message: String,
        #[source]
        source: AuthError,
        location: ErrorLocation,
    },

    #[error("Not signed in. Run `fin login` first.")]
    NotSignedIn { location: ErrorLocation },

    #[error("{message}")]
    Usage {
        message: String,
        location: ErrorLocation,
    },

    #[error("Failed to access {path}: {source} {location}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },

    #[error("Failed to initialize logger: {message} {location}")]
    Logger {
        message: String,
        location: ErrorLocation,
    },

    #[error("Failed to serialize output: {source} {location}")]
    Output {
        #[source]
        source: serde_json::Error,
        location: ErrorLocation,
    },
}

impl CliError {
    /// Classifies `source` with the screen's overrides.
    #[track_caller]
    pub fn api(source: AuthError, overrides: &MessageOverrides) -> Self {
        Self::Api {
            message: FailureClassifier::message_for(&source, overrides),
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Wraps `source` under a fixed message.
    #[track_caller]
    pub fn api_with_message(source: AuthError, message: impl Into<String>) -> Self {
        Self::Api {
            message: message.into(),
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn not_signed_in() -> Self {
        Self::NotSignedIn {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn usage(message: impl Into<String>) -> Self {
        Self::Usage {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn logger(message: impl Into<String>) -> Self {
        Self::Logger {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn output(source: serde_json::Error) -> Self {
        Self::Output {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, CliError>;
