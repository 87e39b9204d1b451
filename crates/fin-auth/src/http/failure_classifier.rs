use crate::{ApiFailure, AuthError, MessageOverrides};

use serde_json::Value;

pub const DEFAULT_NETWORK_ERROR: &str = "Unable to connect to the server. Please try again.";
pub const DEFAULT_BAD_REQUEST: &str = "Invalid data. Please check the information provided.";
pub const DEFAULT_UNAUTHORIZED: &str = "Not authorized.";
pub const DEFAULT_FORBIDDEN: &str = "Access denied.";
pub const DEFAULT_NOT_FOUND: &str = "Resource not found.";
pub const DEFAULT_CONFLICT: &str = "Conflict while processing the request.";
pub const DEFAULT_SERVER_ERROR: &str = "Server error. Please try again later.";
pub const DEFAULT_FALLBACK: &str = "Something went wrong. Please try again.";

/// Maps failed exchanges to user-facing messages and session verdicts.
pub struct FailureClassifier;

impl FailureClassifier {
    /// True for 401 and 403, the statuses that invalidate the session.
    pub fn is_unauthorized(failure: &ApiFailure) -> bool {
        matches!(failure.status, Some(401) | Some(403))
    }

    /// Message carried by the response body: a plain string body, or the
    /// `message` then `error` field of a JSON object. Trimmed; blank is absent.
    pub fn server_message(failure: &ApiFailure) -> Option<String> {
        match failure.body.as_ref()? {
            Value::String(text) => non_blank(text),
            Value::Object(fields) => ["message", "error"]
                .iter()
                .filter_map(|name| fields.get(*name).and_then(Value::as_str))
                .find_map(non_blank),
            _ => None,
        }
    }

    pub fn message(failure: &ApiFailure, overrides: &MessageOverrides) -> String {
        let Some(status) = failure.status else {
            return pick(&[&overrides.fallback], DEFAULT_FALLBACK);
        };

        match status {
            0 => pick(&[&overrides.network_error], DEFAULT_NETWORK_ERROR),
            400 => Self::server_message(failure)
                .unwrap_or_else(|| pick(&[&overrides.bad_request], DEFAULT_BAD_REQUEST)),
            401 => pick(&[&overrides.unauthorized], DEFAULT_UNAUTHORIZED),
            403 => pick(
                &[&overrides.forbidden, &overrides.unauthorized],
                DEFAULT_FORBIDDEN,
            ),
            404 => pick(&[&overrides.not_found], DEFAULT_NOT_FOUND),
            409 => Self::server_message(failure)
                .unwrap_or_else(|| pick(&[&overrides.conflict], DEFAULT_CONFLICT)),
            500.. => pick(&[&overrides.server_error], DEFAULT_SERVER_ERROR),
            _ => Self::server_message(failure)
                .unwrap_or_else(|| pick(&[&overrides.fallback], DEFAULT_FALLBACK)),
        }
    }

    /// Message for any client error. Local failures that never reached the
    /// server use the fallback, except upload validation which speaks for itself.
    pub fn message_for(error: &AuthError, overrides: &MessageOverrides) -> String {
        match error {
            AuthError::Api(failure) => Self::message(failure, overrides),
            AuthError::InvalidUpload { message, .. } => message.clone(),
            _ => pick(&[&overrides.fallback], DEFAULT_FALLBACK),
        }
    }

    /// [`is_unauthorized`](Self::is_unauthorized) for any client error.
    pub fn is_unauthorized_error(error: &AuthError) -> bool {
        error.failure().is_some_and(Self::is_unauthorized)
    }
}

fn non_blank(text: &str) -> Option<String> {
    let trimmed = text.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

fn pick(candidates: &[&Option<String>], default: &str) -> String {
    candidates
        .iter()
        .filter_map(|c| c.as_deref())
        .find(|c| !c.is_empty())
        .unwrap_or(default)
        .to_string()
}
