use crate::client::models::null_as_empty;

use serde::{Deserialize, Serialize};

/// Login/register response
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub token: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_key: Option<String>,
}

impl AuthResponse {
    /// Only responses carrying both a token and a name establish a session.
    pub fn establishes_session(&self) -> bool {
        !self.token.is_empty() && !self.name.is_empty()
    }
}
