pub(crate) mod avatar_preview;
pub(crate) mod preview_file;

pub use avatar_preview::AvatarPreview;
pub use preview_file::PreviewFile;
