pub(crate) mod auth_guard;
pub(crate) mod session_exit;

pub use auth_guard::{AuthGuard, GuardDecision};
pub use session_exit::{ScheduledLogout, SessionExit};
