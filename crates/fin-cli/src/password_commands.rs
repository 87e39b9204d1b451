use clap::Subcommand;

#[derive(Subcommand)]
pub enum PasswordCommands {
    /// Change the account password
    Change {
        /// Current password
        #[arg(long)]
        current: String,
        /// New password
        #[arg(long = "new")]
        new_password: String,
    },
}
