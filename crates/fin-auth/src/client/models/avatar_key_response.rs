use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvatarKeyResponse {
    #[serde(default)]
    pub avatar_key: Option<String>,
}
