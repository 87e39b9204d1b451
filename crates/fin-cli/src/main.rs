//! fin - personal finance client CLI
//!
//! # Examples
//!
//! ```bash
//! # Sign in
//! fin login --email me@example.com --password secret
//!
//! # Show the stored session
//! fin status --pretty
//!
//! # Replace the avatar
//! fin avatar upload ./me.png
//! ```

use fin_cli::Cli;

use std::process::ExitCode;

use clap::Parser;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match fin_cli::run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
