//! fin-cli library
//!
//! Command-line surface of the finance client. Commands run through
//! [`App`], which prints JSON on stdout and status text on stderr.

pub(crate) mod app;
pub(crate) mod avatar_commands;
pub(crate) mod cli;
pub(crate) mod commands;
pub(crate) mod display;
pub(crate) mod error;
pub(crate) mod logger;
pub(crate) mod messages;
pub(crate) mod navigator;
pub(crate) mod password_commands;
pub(crate) mod profile_commands;


pub use app::App;
pub use avatar_commands::AvatarCommands;
pub use cli::Cli;
pub use commands::Commands;
pub use display::{SessionView, avatar_file_name, user_initials};
pub use error::{CliError, Result as CliResult};
pub use navigator::CliNavigator;
pub use password_commands::PasswordCommands;
pub use profile_commands::ProfileCommands;

use fin_config::Config;

use std::path::PathBuf;

use serde_json::Value;

/// Loads configuration, initializes logging and runs one command.
pub async fn run(cli: Cli) -> CliResult<()> {
    let config = Config::load()?;
    config.validate()?;

    logger::initialize(
        config.logging.level,
        config.logging.file.as_ref().map(PathBuf::from),
        config.logging.colored,
    )?;
    config.log_summary();

    let mut app = App::from_config(&config, cli.api.as_deref())?;
    let value = execute(&mut app, cli.command).await?;

    print_json(&value, cli.pretty)?;
    if let Some(message) = app.status().success() {
        eprintln!("{message}");
    }
    Ok(())
}

/// Dispatches a parsed command.
pub async fn execute(app: &mut App, command: Commands) -> CliResult<Value> {
    match command {
        Commands::Login { email, password } => app.login(&email, &password).await,
        Commands::Register {
            name,
            email,
            password,
        } => app.register(&name, &email, &password).await,
        Commands::Logout => Ok(app.logout()),
        Commands::Status => app.session_status(),

        Commands::Profile { action } => match action {
            ProfileCommands::Show => app.show_profile().await,
            ProfileCommands::Update { name, email } => app.update_profile(name, email).await,
        },

        Commands::Password { action } => match action {
            PasswordCommands::Change {
                current,
                new_password,
            } => app.change_password(&current, &new_password).await,
        },

        Commands::Avatar { action } => match action {
            AvatarCommands::Upload { path } => app.upload_avatar(&path).await,
            AvatarCommands::Fetch { output } => app.fetch_avatar(output).await,
            AvatarCommands::Clear => app.clear_avatar(),
        },
    }
}

fn print_json(value: &Value, pretty: bool) -> CliResult<()> {
    let output = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    };

    println!("{}", output.map_err(CliError::output)?);
    Ok(())
}
