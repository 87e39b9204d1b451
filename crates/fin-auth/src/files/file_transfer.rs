use crate::http::api_paths;
use crate::{ApiTransport, AuthError, AuthResult, AvatarUpload, UploadResponse};

use std::sync::Arc;

use bytes::Bytes;
use reqwest::Method;
use reqwest::multipart::{Form, Part};

/// Upload and download of stored files (avatars).
#[derive(Clone)]
pub struct FileTransferClient {
    transport: Arc<ApiTransport>,
}

impl FileTransferClient {
    pub fn new(transport: Arc<ApiTransport>) -> Self {
        Self { transport }
    }

    /// Upload an avatar image as the `file` part of a multipart form
    pub async fn upload_avatar(&self, upload: &AvatarUpload) -> AuthResult<UploadResponse> {
        let part = Part::bytes(upload.bytes().to_vec())
            .file_name(upload.file_name().to_string())
            .mime_str(upload.content_type())
            .map_err(|e| AuthError::invalid_upload(format!("invalid content type: {e}")))?;
        let form = Form::new().part("file", part);

        let req = self
            .transport
            .request(Method::POST, api_paths::S3_UPLOAD)
            .multipart(form);

        self.transport
            .send_json(req)
            .await
            .map_err(|e| AuthError::from_failed("Upload avatar", e))
    }

    /// Download a stored file by key
    pub async fn download_by_key(&self, key: &str) -> AuthResult<Bytes> {
        let url = self
            .transport
            .url_with_segment(api_paths::S3_DOWNLOAD, key)
            .map_err(|e| AuthError::from_failed("Download", e))?;

        let req = self.transport.request_url(Method::GET, url);
        self.transport
            .send_bytes(req)
            .await
            .map_err(|e| AuthError::from_failed("Download", e))
    }
}
