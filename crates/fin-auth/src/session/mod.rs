pub(crate) mod session;
pub(crate) mod session_store;
pub(crate) mod subscription;

pub use session::Session;
pub use session_store::SessionStore;
pub use subscription::Subscription;
