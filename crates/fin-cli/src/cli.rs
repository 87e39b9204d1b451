use crate::commands::Commands;

use clap::Parser;

#[derive(Parser)]
#[command(name = "fin")]
#[command(about = "Personal finance client: sign in and manage your profile")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// API base URL (overrides api.base_url from config)
    #[arg(long, global = true)]
    pub api: Option<String>,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,
}
