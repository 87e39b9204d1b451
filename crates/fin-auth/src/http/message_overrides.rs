/// Caller-supplied replacements for the classifier's default messages.
///
/// Empty strings count as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageOverrides {
    pub bad_request: Option<String>,
    pub unauthorized: Option<String>,
    pub forbidden: Option<String>,
    pub not_found: Option<String>,
    pub conflict: Option<String>,
    pub server_error: Option<String>,
    pub network_error: Option<String>,
    pub fallback: Option<String>,
}

impl MessageOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bad_request(mut self, message: impl Into<String>) -> Self {
        self.bad_request = Some(message.into());
        self
    }

    pub fn unauthorized(mut self, message: impl Into<String>) -> Self {
        self.unauthorized = Some(message.into());
        self
    }

    pub fn forbidden(mut self, message: impl Into<String>) -> Self {
        self.forbidden = Some(message.into());
        self
    }

    pub fn not_found(mut self, message: impl Into<String>) -> Self {
        self.not_found = Some(message.into());
        self
    }

    pub fn conflict(mut self, message: impl Into<String>) -> Self {
        self.conflict = Some(message.into());
        self
    }

    pub fn server_error(mut self, message: impl Into<String>) -> Self {
        self.server_error = Some(message.into());
        self
    }

    pub fn network_error(mut self, message: impl Into<String>) -> Self {
        self.network_error = Some(message.into());
        self
    }

    pub fn fallback(mut self, message: impl Into<String>) -> Self {
        self.fallback = Some(message.into());
        self
    }
}
