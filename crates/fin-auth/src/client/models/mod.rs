mod auth_response;
mod avatar_key_response;
mod change_password_request;
mod change_password_response;
mod login_request;
mod profile_response;
mod register_request;
mod update_profile_request;
mod update_profile_response;
mod user_id;

pub use auth_response::AuthResponse;
pub use avatar_key_response::AvatarKeyResponse;
pub use change_password_request::ChangePasswordRequest;
pub use change_password_response::ChangePasswordResponse;
pub use login_request::LoginRequest;
pub use profile_response::ProfileResponse;
pub use register_request::RegisterRequest;
pub use update_profile_request::UpdateProfileRequest;
pub use update_profile_response::UpdateProfileResponse;
pub use user_id::UserId;

use serde::{Deserialize, Deserializer};

/// Distinguishes an absent field (`None`) from an explicit `null`
/// (`Some(None)`). Pair with `#[serde(default)]`.
pub(crate) fn explicit_field<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// Reads a string field that the server may send as `null`.
pub(crate) fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}
