use crate::{AuthClient, Navigator};

use std::sync::Arc;
use std::time::Duration;

use log::{debug, info};
use tokio::task::JoinHandle;

/// Ends the session and returns the user to the login surface.
#[derive(Clone)]
pub struct SessionExit {
    client: AuthClient,
    navigator: Arc<dyn Navigator>,
    default_delay: Duration,
}

impl SessionExit {
    pub fn new(client: AuthClient, navigator: Arc<dyn Navigator>, default_delay: Duration) -> Self {
        Self {
            client,
            navigator,
            default_delay,
        }
    }

    pub fn default_delay(&self) -> Duration {
        self.default_delay
    }

    pub fn logout_to_login(&self) {
        self.client.logout();
        self.navigator.redirect_to_login();
    }

    /// Runs [`logout_to_login`](Self::logout_to_login) after `delay`, or the
    /// configured default. Must be called within a tokio runtime.
    pub fn schedule_logout_to_login(&self, delay: Option<Duration>) -> ScheduledLogout {
        let delay = delay.unwrap_or(self.default_delay);
        let exit = self.clone();
        info!("Logging out in {}ms", delay.as_millis());

        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            exit.logout_to_login();
        });

        ScheduledLogout { handle }
    }
}

/// Pending logout. Dropping the handle leaves the logout scheduled.
#[derive(Debug)]
pub struct ScheduledLogout {
    handle: JoinHandle<()>,
}

impl ScheduledLogout {
    /// Abandons the logout if it has not happened yet.
    pub fn cancel(self) {
        debug!("Scheduled logout cancelled");
        self.handle.abort();
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Waits for the delay to pass. True if the logout ran.
    pub async fn wait(self) -> bool {
        self.handle.await.is_ok()
    }
}
