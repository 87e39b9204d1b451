pub(crate) mod avatar_upload;
pub(crate) mod file_transfer;
pub(crate) mod upload_response;

pub use avatar_upload::{ALLOWED_AVATAR_TYPES, AvatarUpload, MAX_AVATAR_SIZE_BYTES, content_type_for};
pub use file_transfer::FileTransferClient;
pub use upload_response::UploadResponse;
