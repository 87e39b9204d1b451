use fin_auth::Navigator;

use std::sync::atomic::{AtomicUsize, Ordering};

/// Terminal stand-in for the login screen: tells the user to sign in again.
#[derive(Debug, Default)]
pub struct CliNavigator {
    redirects: AtomicUsize,
}

impl CliNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a redirect to login was requested during this run.
    pub fn redirected(&self) -> bool {
        self.redirect_count() > 0
    }

    pub fn redirect_count(&self) -> usize {
        self.redirects.load(Ordering::SeqCst)
    }
}

impl Navigator for CliNavigator {
    fn redirect_to_login(&self) {
        // Notice once per run
        if self.redirects.fetch_add(1, Ordering::SeqCst) == 0 {
            eprintln!("Session expired, please log in: fin login --email <email> --password <password>");
        }
    }
}
