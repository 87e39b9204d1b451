//! fin-auth
//!
//! Session, authentication and API plumbing for the finance client:
//! persistent credentials, an observable session, the auth and file
//! clients, and classification of failed requests into user messages.

pub(crate) mod avatar;
pub(crate) mod client;
pub(crate) mod context;
pub(crate) mod error;
pub(crate) mod feedback;
pub(crate) mod files;
pub(crate) mod guard;
pub mod http;
pub mod session;
pub mod storage;

#[cfg(test)]
mod tests;

pub use avatar::{AvatarPreview, PreviewFile};
pub use client::{
    AuthClient, AuthResponse, AvatarKeyResponse, ChangePasswordRequest, ChangePasswordResponse,
    CredentialStore, LoginRequest, ProfileResponse, RegisterRequest, UpdateProfileRequest,
    UpdateProfileResponse, UserId,
};
pub use context::ApiContext;
pub use error::{AuthError, Result as AuthResult};
pub use feedback::StatusMessages;
pub use files::{
    ALLOWED_AVATAR_TYPES, AvatarUpload, FileTransferClient, MAX_AVATAR_SIZE_BYTES, UploadResponse,
    content_type_for,
};
pub use guard::{AuthGuard, GuardDecision, ScheduledLogout, SessionExit};
pub use http::{
    ApiFailure, ApiTransport, Credential, FailureClassifier, MessageOverrides, Navigator,
    NoopNavigator, RequestAuthenticator,
};
pub use session::{Session, SessionStore, Subscription};
pub use storage::{FileStore, KeyValueStore, MemoryStore, StorageError, StorageResult};
