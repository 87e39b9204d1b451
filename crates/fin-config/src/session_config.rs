use crate::{ConfigError, ConfigErrorResult};

use std::time::Duration;

use serde::Deserialize;

// Success message display constraints
pub const MIN_SUCCESS_MESSAGE_MS: u64 = 500;
pub const MAX_SUCCESS_MESSAGE_MS: u64 = 60_000;
pub const DEFAULT_SUCCESS_MESSAGE_MS: u64 = 3000;

// Scheduled logout constraints
pub const MAX_LOGOUT_DELAY_MS: u64 = 30_000;
pub const DEFAULT_LOGOUT_DELAY_MS: u64 = 2000;

/// UI timing around the session lifecycle
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// How long success messages stay visible
    pub success_message_ms: u64,
    /// Delay before logging out after a "session expired" error
    pub logout_delay_ms: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            success_message_ms: DEFAULT_SUCCESS_MESSAGE_MS,
            logout_delay_ms: DEFAULT_LOGOUT_DELAY_MS,
        }
    }
}

impl SessionConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.success_message_ms < MIN_SUCCESS_MESSAGE_MS
            || self.success_message_ms > MAX_SUCCESS_MESSAGE_MS
        {
            return Err(ConfigError::config(format!(
                "session.success_message_ms must be {}-{}, got {}",
                MIN_SUCCESS_MESSAGE_MS, MAX_SUCCESS_MESSAGE_MS, self.success_message_ms
            )));
        }

        if self.logout_delay_ms > MAX_LOGOUT_DELAY_MS {
            return Err(ConfigError::config(format!(
                "session.logout_delay_ms must be 0-{}, got {}",
                MAX_LOGOUT_DELAY_MS, self.logout_delay_ms
            )));
        }

        Ok(())
    }

    pub fn success_message_duration(&self) -> Duration {
        Duration::from_millis(self.success_message_ms)
    }

    pub fn logout_delay(&self) -> Duration {
        Duration::from_millis(self.logout_delay_ms)
    }
}
