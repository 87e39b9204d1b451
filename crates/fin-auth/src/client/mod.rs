pub(crate) mod auth_client;
pub(crate) mod credential_store;
pub(crate) mod models;

pub use auth_client::AuthClient;
pub use credential_store::CredentialStore;
pub use models::{
    AuthResponse, AvatarKeyResponse, ChangePasswordRequest, ChangePasswordResponse,
    LoginRequest, ProfileResponse, RegisterRequest, UpdateProfileRequest, UpdateProfileResponse,
    UserId,
};
