use std::error::Error as StdError;
use std::fmt;
use std::panic::Location;

use error_location::ErrorLocation;
use serde_json::Value;
use thiserror::Error;

/// A failed HTTP exchange, kept as raw as possible for the classifier.
///
/// `status` is `Some(0)` when no connection could be made (connect error,
/// timeout, failed send), `None` when the failure carries no HTTP status at
/// all, as with requests that could not be built.
#[derive(Error, Debug)]
#[error("Request to {url} failed ({}): {message} {location}", StatusLabel(.status))]
pub struct ApiFailure {
    pub status: Option<u16>,
    /// Response body: JSON when it parses, otherwise the raw text
    pub body: Option<Value>,
    pub url: String,
    pub message: String,
    location: ErrorLocation,
    #[source]
    source: Option<Box<dyn StdError + Send + Sync>>,
}

struct StatusLabel<'a>(&'a Option<u16>);

impl fmt::Display for StatusLabel<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self.0 {
            Some(0) => write!(f, "no connection"),
            Some(status) => write!(f, "status {status}"),
            None => write!(f, "no status"),
        }
    }
}

impl ApiFailure {
    /// Non-success HTTP response.
    #[track_caller]
    pub fn response(url: impl Into<String>, status: u16, body: Option<Value>) -> Self {
        Self {
            status: Some(status),
            body,
            url: url.into(),
            message: format!("server responded with status {status}"),
            location: ErrorLocation::from(Location::caller()),
            source: None,
        }
    }

    /// The server could not be reached.
    #[track_caller]
    pub fn network(url: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            status: Some(0),
            body: None,
            url: url.into(),
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
            source: None,
        }
    }

    /// Failure with no HTTP status to classify.
    #[track_caller]
    pub fn unclassified(url: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            status: None,
            body: None,
            url: url.into(),
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
            source: None,
        }
    }

    /// Success status whose body could not be decoded.
    #[track_caller]
    pub fn decode(url: impl Into<String>, status: u16, source: serde_json::Error) -> Self {
        Self {
            status: Some(status),
            body: None,
            url: url.into(),
            message: format!("failed to decode response body: {source}"),
            location: ErrorLocation::from(Location::caller()),
            source: Some(Box::new(source)),
        }
    }

    /// Convert a transport-level reqwest error.
    #[track_caller]
    pub fn from_reqwest(url: impl Into<String>, err: reqwest::Error) -> Self {
        let status = if err.is_connect() || err.is_timeout() || err.is_request() {
            Some(0)
        } else {
            err.status().map(|s| s.as_u16())
        };

        Self {
            status,
            body: None,
            url: url.into(),
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: Some(Box::new(err)),
        }
    }

    /// Attach a response body.
    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Parses a response body: JSON if possible, raw text otherwise,
    /// `None` for blank bodies.
    pub(crate) fn parse_body(text: &str) -> Option<Value> {
        if text.trim().is_empty() {
            return None;
        }
        Some(serde_json::from_str(text).unwrap_or_else(|_| Value::String(text.to_string())))
    }
}
