use crate::UpdateProfileRequest;
use crate::client::models::explicit_field;

use serde::{Deserialize, Serialize};

/// Fields the server confirmed after a profile update.
///
/// `avatar_key` is `None` when absent, `Some(None)` when explicitly cleared.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(
        default,
        deserialize_with = "explicit_field",
        skip_serializing_if = "Option::is_none"
    )]
    pub avatar_key: Option<Option<String>>,
}

impl From<&UpdateProfileRequest> for UpdateProfileResponse {
    /// Echo of the request, for servers that answer with an empty body.
    fn from(request: &UpdateProfileRequest) -> Self {
        Self {
            name: request.name.clone(),
            email: request.email.clone(),
            avatar_key: None,
        }
    }
}
