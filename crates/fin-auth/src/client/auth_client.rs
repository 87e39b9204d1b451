use crate::http::api_paths;
use crate::{
    ApiTransport, AuthError, AuthResponse, AuthResult, AvatarKeyResponse,
    ChangePasswordRequest, ChangePasswordResponse, CredentialStore, LoginRequest, ProfileResponse,
    RegisterRequest, SessionStore, UpdateProfileRequest, UpdateProfileResponse,
};

use std::sync::Arc;

use log::{info, warn};
use reqwest::Method;
use serde::Serialize;

/// Login, registration and profile operations.
///
/// A thin transport: failures come back unmodified for the
/// [`FailureClassifier`](crate::FailureClassifier) to interpret. Nothing is
/// retried. Successful operations write through the credential store and
/// resync the session.
#[derive(Clone)]
pub struct AuthClient {
    transport: Arc<ApiTransport>,
    credentials: CredentialStore,
}

impl AuthClient {
    pub fn new(transport: Arc<ApiTransport>, credentials: CredentialStore) -> Self {
        Self {
            transport,
            credentials,
        }
    }

    pub fn session(&self) -> &SessionStore {
        self.credentials.session()
    }

    pub fn credentials(&self) -> &CredentialStore {
        &self.credentials
    }

    // =========================================================================
    // Session
    // =========================================================================

    /// Sign in with email and password
    pub async fn login(&self, email: &str, password: &str) -> AuthResult<AuthResponse> {
        let body = LoginRequest { email, password };
        let req = self
            .transport
            .request(Method::POST, api_paths::LOGIN)
            .json(&body);

        let response: AuthResponse = self
            .transport
            .send_json(req)
            .await
            .map_err(|e| AuthError::from_failed("Login", e))?;

        self.establish("Login", &response, email)?;
        Ok(response)
    }

    /// Create an account and sign in
    pub async fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> AuthResult<AuthResponse> {
        let body = RegisterRequest {
            name,
            email,
            password,
        };
        let req = self
            .transport
            .request(Method::POST, api_paths::REGISTER)
            .json(&body);

        let response: AuthResponse = self
            .transport
            .send_json(req)
            .await
            .map_err(|e| AuthError::from_failed("Register", e))?;

        self.establish("Register", &response, email)?;
        Ok(response)
    }

    /// Forget the stored session. Never fails.
    pub fn logout(&self) {
        self.credentials.logout();
        info!("Logged out");
    }

    /// True iff a token is currently persisted
    pub fn is_authenticated(&self) -> bool {
        self.credentials.is_authenticated()
    }

    pub fn token(&self) -> Option<String> {
        self.credentials.token()
    }

    pub fn user_name(&self) -> Option<String> {
        self.credentials.user_name()
    }

    pub fn user_email(&self) -> Option<String> {
        self.credentials.user_email()
    }

    pub fn user_avatar_key(&self) -> Option<String> {
        self.credentials.user_avatar_key()
    }

    /// Store or remove the avatar reference and resync
    pub fn set_user_avatar_key(&self, key: Option<&str>) -> AuthResult<()> {
        let written = self.credentials.write_avatar_key(key);
        self.credentials.resync();
        written?;
        Ok(())
    }

    // =========================================================================
    // Profile
    // =========================================================================

    /// Update name and/or email. Fields the server confirms are persisted
    /// when they differ from the stored values.
    pub async fn update_profile(
        &self,
        request: &UpdateProfileRequest,
    ) -> AuthResult<UpdateProfileResponse> {
        self.require_authenticated()?;

        let req = self
            .transport
            .request(Method::PUT, api_paths::PROFILE)
            .json(request);

        let response = self
            .transport
            .send_optional_json::<UpdateProfileResponse>(req)
            .await
            .map_err(|e| AuthError::from_failed("Update profile", e))?
            .unwrap_or_else(|| UpdateProfileResponse::from(request));

        let written = self.apply_profile_update(&response);
        self.credentials.resync();
        written?;

        Ok(response)
    }

    /// Fetch the profile and overwrite the stored identity with it
    pub async fn get_profile(&self) -> AuthResult<ProfileResponse> {
        self.require_authenticated()?;

        let req = self.transport.request(Method::GET, api_paths::PROFILE);
        let profile: ProfileResponse = self
            .transport
            .send_json(req)
            .await
            .map_err(|e| AuthError::from_failed("Get profile", e))?;

        let written = self
            .credentials
            .set_user_name(&profile.name)
            .and_then(|_| self.credentials.set_user_email(&profile.email))
            .and_then(|_| {
                self.credentials
                    .write_avatar_key(profile.avatar_key.as_deref())
            });
        self.credentials.resync();
        written?;

        Ok(profile)
    }

    /// Point the profile at an uploaded avatar
    pub async fn update_avatar_key(&self, avatar_key: &str) -> AuthResult<AvatarKeyResponse> {
        self.require_authenticated()?;

        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct UpdateAvatarRequest<'a> {
            avatar_key: &'a str,
        }

        let req = self
            .transport
            .request(Method::PUT, api_paths::PROFILE_AVATAR)
            .json(&UpdateAvatarRequest { avatar_key });

        let response = self
            .transport
            .send_optional_json::<AvatarKeyResponse>(req)
            .await
            .map_err(|e| AuthError::from_failed("Update avatar", e))?
            .unwrap_or_default();

        let written = self
            .credentials
            .write_avatar_key(response.avatar_key.as_deref());
        self.credentials.resync();
        written?;

        Ok(response)
    }

    /// Change the account password. No local state changes.
    pub async fn change_password(
        &self,
        current_password: &str,
        new_password: &str,
    ) -> AuthResult<ChangePasswordResponse> {
        self.require_authenticated()?;

        let body = ChangePasswordRequest {
            current_password,
            new_password,
        };
        let req = self
            .transport
            .request(Method::PUT, api_paths::PASSWORD)
            .json(&body);

        let response = self
            .transport
            .send_optional_json::<ChangePasswordResponse>(req)
            .await
            .map_err(|e| AuthError::from_failed("Change password", e))?
            .unwrap_or_default();

        Ok(response)
    }

    // =========================================================================
    // Internals
    // =========================================================================

    fn require_authenticated(&self) -> AuthResult<()> {
        if self.credentials.is_authenticated() {
            Ok(())
        } else {
            Err(AuthError::not_authenticated())
        }
    }

    fn establish(&self, operation: &str, response: &AuthResponse, email: &str) -> AuthResult<()> {
        if !response.establishes_session() {
            warn!("{operation} response carried no token or name; session unchanged");
            return Ok(());
        }

        let written = self.credentials.establish(
            &response.token,
            &response.name,
            email,
            response.avatar_key.as_deref(),
        );
        self.credentials.resync();
        written?;

        info!("{operation} succeeded for {}", response.name);
        Ok(())
    }

    fn apply_profile_update(&self, response: &UpdateProfileResponse) -> crate::StorageResult<()> {
        if let Some(name) = response.name.as_deref().filter(|n| !n.is_empty())
            && self.credentials.user_name().as_deref() != Some(name)
        {
            self.credentials.set_user_name(name)?;
        }

        if let Some(email) = response.email.as_deref().filter(|e| !e.is_empty())
            && self.credentials.user_email().as_deref() != Some(email)
        {
            self.credentials.set_user_email(email)?;
        }

        if let Some(avatar_key) = &response.avatar_key {
            self.credentials.write_avatar_key(avatar_key.as_deref())?;
        }

        Ok(())
    }
}
