//! Message overrides used by each command.

use fin_auth::MessageOverrides;

pub const SESSION_EXPIRED: &str = "Session expired. Please log in again.";
pub const CURRENT_PASSWORD_INCORRECT: &str = "Current password is incorrect.";

pub fn login() -> MessageOverrides {
    MessageOverrides::new()
        .unauthorized("Incorrect email or password")
        .not_found("User not found")
        .fallback("Login failed. Please try again.")
}

pub fn register() -> MessageOverrides {
    MessageOverrides::new()
        .conflict("An account with this email already exists.")
        .fallback("Registration failed. Please try again.")
}

pub fn profile() -> MessageOverrides {
    MessageOverrides::new()
        .conflict("This email is already in use. Please choose another.")
        .network_error("Server error. Please try again later.")
        .fallback("Could not update the profile. Please try again.")
}

pub fn password() -> MessageOverrides {
    MessageOverrides::new().fallback("Could not change the password. Please try again.")
}

pub fn avatar() -> MessageOverrides {
    MessageOverrides::new().fallback("Could not update the avatar. Please try again.")
}
