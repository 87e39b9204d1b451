use std::path::PathBuf;

use clap::Subcommand;

#[derive(Subcommand)]
pub enum AvatarCommands {
    /// Upload a PNG, JPG or WEBP image (max 2MB) as the avatar
    Upload {
        /// Image file
        path: PathBuf,
    },
    /// Download the current avatar
    Fetch {
        /// Destination file (default: ./avatar-<key>)
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Forget the avatar reference stored locally
    Clear,
}
