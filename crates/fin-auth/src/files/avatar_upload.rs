use crate::{AuthError, AuthResult};

use std::path::Path;

use bytes::Bytes;

pub const MAX_AVATAR_SIZE_BYTES: usize = 2 * 1024 * 1024;
pub const ALLOWED_AVATAR_TYPES: [&str; 3] = ["image/jpeg", "image/png", "image/webp"];

/// A validated avatar image ready to upload.
#[derive(Debug, Clone)]
pub struct AvatarUpload {
    file_name: String,
    content_type: String,
    bytes: Bytes,
}

impl AvatarUpload {
    /// Checks type and size before anything is sent.
    pub fn new(
        file_name: impl Into<String>,
        content_type: impl Into<String>,
        bytes: impl Into<Bytes>,
    ) -> AuthResult<Self> {
        let file_name = file_name.into();
        let content_type = content_type.into();
        let bytes = bytes.into();

        if !ALLOWED_AVATAR_TYPES.contains(&content_type.as_str()) {
            return Err(AuthError::invalid_upload(
                "Unsupported format. Use PNG, JPG or WEBP.",
            ));
        }

        if bytes.len() > MAX_AVATAR_SIZE_BYTES {
            return Err(AuthError::invalid_upload(
                "Image too large. Maximum size: 2MB.",
            ));
        }

        Ok(Self {
            file_name,
            content_type,
            bytes,
        })
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    pub fn bytes(&self) -> &Bytes {
        &self.bytes
    }
}

/// Image content type from a file extension.
pub fn content_type_for(path: &Path) -> Option<&'static str> {
    let extension = path.extension()?.to_str()?.to_ascii_lowercase();
    match extension.as_str() {
        "jpg" | "jpeg" => Some("image/jpeg"),
        "png" => Some("image/png"),
        "webp" => Some("image/webp"),
        _ => None,
    }
}
