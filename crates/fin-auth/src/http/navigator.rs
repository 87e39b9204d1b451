/// Moves the user interface to another surface.
pub trait Navigator: Send + Sync {
    /// Show the login surface.
    fn redirect_to_login(&self);
}

/// Navigator for headless use.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopNavigator;

impl Navigator for NoopNavigator {
    fn redirect_to_login(&self) {}
}
