use crate::{AuthClient, Navigator};

use log::debug;

/// Outcome of checking access to a protected surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    Allow,
    RedirectToLogin,
}

/// Gate for surfaces that need a signed-in user.
#[derive(Clone)]
pub struct AuthGuard {
    client: AuthClient,
}

impl AuthGuard {
    pub fn new(client: AuthClient) -> Self {
        Self { client }
    }

    pub fn check(&self) -> GuardDecision {
        if self.client.is_authenticated() {
            GuardDecision::Allow
        } else {
            GuardDecision::RedirectToLogin
        }
    }

    /// Like [`check`](Self::check), navigating to login when access is denied.
    pub fn enforce(&self, navigator: &dyn Navigator) -> GuardDecision {
        let decision = self.check();
        if decision == GuardDecision::RedirectToLogin {
            debug!("Protected surface requested without a session");
            navigator.redirect_to_login();
        }
        decision
    }
}
