//! REST paths consumed by the client, relative to the API base.

pub const AUTH_BASE: &str = "/v1/auth";
pub const LOGIN: &str = "/v1/auth/login";
pub const REGISTER: &str = "/v1/auth/register";
pub const PROFILE: &str = "/v1/auth/profile";
pub const PROFILE_AVATAR: &str = "/v1/auth/profile/avatar";
pub const PASSWORD: &str = "/v1/auth/password";

pub const S3_UPLOAD: &str = "/v1/s3/upload";
/// Followed by one percent-encoded key segment.
pub const S3_DOWNLOAD: &str = "/v1/s3/download";

/// Endpoints whose rejections never tear the session down.
pub const AUTH_EXCLUDED: [&str; 2] = [LOGIN, REGISTER];

/// Joins `path` onto `base`, trimming trailing slashes from the base and
/// ensuring a leading slash on the path. An empty base yields the path.
pub fn api_url(base: &str, path: &str) -> String {
    let base = base.trim_end_matches('/');
    let path = if path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{path}")
    };

    if base.is_empty() {
        path
    } else {
        format!("{base}{path}")
    }
}

/// True when `url` targets login or register.
pub fn is_auth_excluded(url: &str) -> bool {
    AUTH_EXCLUDED.iter().any(|path| url.contains(path))
}
