use std::time::Duration;

use tokio::time::Instant;

#[derive(Debug, Clone)]
struct Timed {
    text: String,
    until: Instant,
}

/// One success and one error message for a screen.
///
/// Setting either clears the other. A success is visible for a limited
/// time; an error stays until cleared or replaced.
#[derive(Debug, Clone)]
pub struct StatusMessages {
    success: Option<Timed>,
    error: Option<String>,
    success_duration: Duration,
}

impl StatusMessages {
    pub fn new(success_duration: Duration) -> Self {
        Self {
            success: None,
            error: None,
            success_duration,
        }
    }

    pub fn set_success(&mut self, message: impl Into<String>) {
        self.set_success_for(message, self.success_duration);
    }

    pub fn set_success_for(&mut self, message: impl Into<String>, duration: Duration) {
        self.error = None;
        self.success = Some(Timed {
            text: message.into(),
            until: Instant::now() + duration,
        });
    }

    pub fn set_error(&mut self, message: impl Into<String>) {
        self.success = None;
        self.error = Some(message.into());
    }

    pub fn clear(&mut self) {
        self.success = None;
        self.error = None;
    }

    /// The success message, while it is still visible.
    pub fn success(&self) -> Option<&str> {
        self.success
            .as_ref()
            .filter(|s| Instant::now() < s.until)
            .map(|s| s.text.as_str())
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}
