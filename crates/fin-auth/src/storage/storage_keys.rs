//! Flat key namespace of the persisted session entries.

pub const TOKEN: &str = "token";
pub const USER_NAME: &str = "userName";
pub const USER_EMAIL: &str = "userEmail";
pub const USER_AVATAR_KEY: &str = "userAvatarKey";
/// Read-only migration source for [`USER_AVATAR_KEY`].
pub const USER_AVATAR_URL: &str = "userAvatarUrl";

/// Every slot owned by the session, legacy slot included.
pub const ALL: [&str; 5] = [
    TOKEN,
    USER_NAME,
    USER_EMAIL,
    USER_AVATAR_KEY,
    USER_AVATAR_URL,
];

/// Returns the legacy avatar value when it can stand in for an avatar key.
///
/// Values with an `http://`/`https://` scheme or any `/` are URLs or paths
/// and are never treated as keys.
pub fn legacy_avatar_key(legacy: &str) -> Option<&str> {
    if legacy.is_empty() || legacy.contains('/') || has_http_scheme(legacy) {
        return None;
    }
    Some(legacy)
}

fn has_http_scheme(value: &str) -> bool {
    let lower = value.get(..8).unwrap_or(value).to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}
