use crate::{
    avatar_commands::AvatarCommands, password_commands::PasswordCommands,
    profile_commands::ProfileCommands,
};

use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// Sign in with email and password
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },

    /// Create an account and sign in
    Register {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },

    /// Forget the stored session
    Logout,

    /// Show the stored session
    Status,

    /// Profile operations
    Profile {
        #[command(subcommand)]
        action: ProfileCommands,
    },

    /// Password operations
    Password {
        #[command(subcommand)]
        action: PasswordCommands,
    },

    /// Avatar operations
    Avatar {
        #[command(subcommand)]
        action: AvatarCommands,
    },
}
