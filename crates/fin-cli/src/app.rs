use crate::display::{SessionView, avatar_file_name, user_initials};
use crate::{CliError, CliNavigator, CliResult, messages};

use fin_auth::{
    ApiContext, AuthError, AuthGuard, AvatarPreview, AvatarUpload, FileStore, GuardDecision,
    KeyValueStore, SessionExit, StatusMessages, UpdateProfileRequest, content_type_for,
};
use fin_config::{Config, SessionConfig};

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use log::{debug, info};
use serde_json::{Value, json};

/// Command implementations behind the `fin` binary.
///
/// Each command returns the JSON value to print. Status text for the user
/// is kept in [`StatusMessages`].
pub struct App {
    api: ApiContext,
    guard: AuthGuard,
    exit: SessionExit,
    navigator: Arc<CliNavigator>,
    status: StatusMessages,
    fetch_timeout: Duration,
}

impl App {
    /// Wires the clients from configuration. `api_override` replaces the
    /// configured base URL.
    pub fn from_config(config: &Config, api_override: Option<&str>) -> CliResult<Self> {
        let store: Arc<dyn KeyValueStore> = Arc::new(FileStore::new(config.storage_path()?));
        let base_url = api_override.unwrap_or(&config.api.base_url);
        Self::connect(base_url, config.api.timeout(), store, &config.session)
    }

    pub fn connect(
        base_url: &str,
        timeout: Duration,
        store: Arc<dyn KeyValueStore>,
        session: &SessionConfig,
    ) -> CliResult<Self> {
        let navigator = Arc::new(CliNavigator::new());
        let api = ApiContext::new(base_url, timeout, store, navigator.clone()).map_err(|e| {
            let message = e.to_string();
            CliError::api_with_message(e, message)
        })?;

        debug!("Using API at {base_url}");

        Ok(Self {
            guard: AuthGuard::new(api.auth.clone()),
            exit: SessionExit::new(api.auth.clone(), navigator.clone(), session.logout_delay()),
            status: StatusMessages::new(session.success_message_duration()),
            fetch_timeout: timeout + Duration::from_secs(1),
            navigator,
            api,
        })
    }

    pub fn api(&self) -> &ApiContext {
        &self.api
    }

    pub fn status(&self) -> &StatusMessages {
        &self.status
    }

    pub fn navigator(&self) -> &CliNavigator {
        &self.navigator
    }

    // =========================================================================
    // Session
    // =========================================================================

    pub async fn login(&mut self, email: &str, password: &str) -> CliResult<Value> {
        let result = self.api.auth.login(email, password).await;
        match result {
            Ok(response) => {
                self.status.set_success(format!("Welcome, {}", response.name));
                Ok(self.identity())
            }
            Err(e) => Err(self.fail(CliError::api(e, &messages::login()))),
        }
    }

    pub async fn register(&mut self, name: &str, email: &str, password: &str) -> CliResult<Value> {
        let result = self.api.auth.register(name, email, password).await;
        match result {
            Ok(response) => {
                self.status
                    .set_success(format!("Account created. Welcome, {}", response.name));
                Ok(self.identity())
            }
            Err(e) => Err(self.fail(CliError::api(e, &messages::register()))),
        }
    }

    pub fn logout(&mut self) -> Value {
        self.api.auth.logout();
        self.status.set_success("Logged out");
        json!({ "authenticated": false })
    }

    pub fn session_status(&self) -> CliResult<Value> {
        let view = SessionView::new(&self.api.session().snapshot(), self.guard.check());
        serde_json::to_value(view).map_err(CliError::output)
    }

    // =========================================================================
    // Profile
    // =========================================================================

    pub async fn show_profile(&mut self) -> CliResult<Value> {
        self.require_session()?;

        let result = self.api.auth.get_profile().await;
        match result {
            Ok(profile) => Ok(json!({
                "id": profile.id.to_string(),
                "name": profile.name,
                "email": profile.email,
                "avatarKey": profile.avatar_key,
                "initials": user_initials(Some(&profile.name)),
            })),
            Err(e) => Err(self.profile_failure(e).await),
        }
    }

    pub async fn update_profile(
        &mut self,
        name: Option<String>,
        email: Option<String>,
    ) -> CliResult<Value> {
        let mut request = UpdateProfileRequest::new();
        request.name = name.filter(|n| !n.trim().is_empty());
        request.email = email.filter(|e| !e.trim().is_empty());
        if request.is_empty() {
            return Err(self.fail(CliError::usage("Nothing to update: pass --name and/or --email")));
        }
        self.require_session()?;

        let result = self.api.auth.update_profile(&request).await;
        match result {
            Ok(_) => {
                self.status.set_success("Profile updated successfully");
                Ok(self.identity())
            }
            Err(e) => Err(self.profile_failure(e).await),
        }
    }

    pub async fn change_password(&mut self, current: &str, new_password: &str) -> CliResult<Value> {
        if current.is_empty() || new_password.is_empty() {
            return Err(self.fail(CliError::usage("Both --current and --new are required")));
        }
        self.require_session()?;

        let result = self.api.auth.change_password(current, new_password).await;
        match result {
            Ok(response) => {
                let message = response
                    .message
                    .unwrap_or_else(|| String::from("Password changed successfully"));
                self.status.set_success(message.clone());
                Ok(json!({ "message": message }))
            }
            Err(e) if e.status() == Some(401) => Err(self.fail(CliError::api_with_message(
                e,
                messages::CURRENT_PASSWORD_INCORRECT,
            ))),
            Err(e) if e.status() == Some(403) => Err(self.expire_session(e).await),
            Err(e) => Err(self.fail(CliError::api(e, &messages::password()))),
        }
    }

    // =========================================================================
    // Avatar
    // =========================================================================

    /// Validates and uploads an image, then points the profile at it.
    pub async fn upload_avatar(&mut self, path: &Path) -> CliResult<Value> {
        self.require_session()?;

        let result = Self::read_upload(path).await;
        let upload = match result {
            Ok(upload) => upload,
            Err(e) => return Err(self.fail(e)),
        };

        let result = self.api.files.upload_avatar(&upload).await;
        let uploaded = match result {
            Ok(uploaded) => uploaded,
            Err(e) => return Err(self.fail(CliError::api(e, &messages::avatar()))),
        };

        let result = self.api.auth.update_avatar_key(&uploaded.key).await;
        match result {
            Ok(response) => {
                info!("Avatar uploaded as {}", uploaded.key);
                self.status.set_success("Avatar updated");
                Ok(json!({ "key": uploaded.key, "avatarKey": response.avatar_key }))
            }
            Err(e) => Err(self.fail(CliError::api(e, &messages::avatar()))),
        }
    }

    /// Downloads the current avatar through a preview and copies it to
    /// `output`.
    pub async fn fetch_avatar(&mut self, output: Option<PathBuf>) -> CliResult<Value> {
        self.require_session()?;

        let Some(key) = self.api.auth.user_avatar_key() else {
            return Ok(json!({ "key": null, "path": null }));
        };

        let preview = AvatarPreview::spawn(self.api.session(), self.api.files.clone());
        let mut updates = preview.updates();
        let fetched = tokio::time::timeout(self.fetch_timeout, updates.changed()).await;

        let source = match fetched {
            Ok(Ok(())) => preview.current_path(),
            _ => None,
        };
        let Some(source) = source else {
            return Err(self.fail(CliError::usage(format!("Avatar {key} could not be downloaded"))));
        };

        let destination = output.unwrap_or_else(|| PathBuf::from(avatar_file_name(&key)));
        tokio::fs::copy(&source, &destination)
            .await
            .map_err(|e| CliError::io(&destination, e))?;

        Ok(json!({ "key": key, "path": destination.display().to_string() }))
    }

    pub fn clear_avatar(&mut self) -> CliResult<Value> {
        self.require_session()?;

        if let Err(e) = self.api.auth.set_user_avatar_key(None) {
            return Err(self.fail(CliError::api(e, &messages::avatar())));
        }
        self.status.set_success("Avatar cleared");
        Ok(json!({ "avatarKey": null }))
    }

    // =========================================================================
    // Internals
    // =========================================================================

    fn identity(&self) -> Value {
        let session = self.api.session().snapshot();
        json!({
            "authenticated": session.is_authenticated(),
            "name": session.user_name,
            "email": session.user_email,
            "initials": user_initials(session.user_name.as_deref()),
        })
    }

    fn require_session(&mut self) -> CliResult<()> {
        match self.guard.enforce(self.navigator.as_ref()) {
            GuardDecision::Allow => Ok(()),
            GuardDecision::RedirectToLogin => Err(self.fail(CliError::not_signed_in())),
        }
    }

    async fn read_upload(path: &Path) -> CliResult<AvatarUpload> {
        let content_type = content_type_for(path).ok_or_else(|| {
            CliError::api(
                AuthError::invalid_upload("Unsupported format. Use PNG, JPG or WEBP."),
                &messages::avatar(),
            )
        })?;
        let bytes = tokio::fs::read(path)
            .await
            .map_err(|e| CliError::io(path, e))?;
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| String::from("avatar"));

        AvatarUpload::new(file_name, content_type, bytes)
            .map_err(|e| CliError::api(e, &messages::avatar()))
    }

    async fn profile_failure(&mut self, error: AuthError) -> CliError {
        match error.status() {
            Some(401) | Some(403) => self.expire_session(error).await,
            _ => self.fail(CliError::api(error, &messages::profile())),
        }
    }

    /// Reports an expired session. A session still held locally is ended
    /// after the logout delay; one the rejected request already tore down
    /// is left alone so the login redirect happens once.
    async fn expire_session(&mut self, error: AuthError) -> CliError {
        let failure = self.fail(CliError::api_with_message(error, messages::SESSION_EXPIRED));
        if self.api.auth.is_authenticated() {
            self.exit.schedule_logout_to_login(None).wait().await;
        } else {
            debug!("Session already ended by the rejected request");
        }
        failure
    }

    fn fail(&mut self, error: CliError) -> CliError {
        self.status.set_error(error.to_string());
        error
    }
}
