use clap::Subcommand;

#[derive(Subcommand)]
pub enum ProfileCommands {
    /// Fetch the profile and refresh the stored identity
    Show,
    /// Change name and/or email
    Update {
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        email: Option<String>,
    },
}
