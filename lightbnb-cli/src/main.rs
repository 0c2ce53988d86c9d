//! lightbnb CLI - run LightBnB data-access operations from the shell
//!
//! Every subcommand opens the pool, issues one statement, prints the result
//! as JSON and closes the pool again:
//! - `user show` / `user create`
//! - `reservations` (a guest's completed stays)
//! - `properties search` / `properties create`

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use lightbnb_db::{Database, DbConfig};
use tracing::debug;

mod commands;
mod tracing_setup;

#[derive(Parser, Debug)]
#[command(
    name = "lightbnb",
    author,
    version,
    about = "Query and populate the LightBnB listing database"
)]
struct Cli {
    /// PostgreSQL connection string (overrides lightbnb.toml)
    #[arg(long, env = "DATABASE_URL", global = true, hide_env_values = true)]
    database_url: Option<String>,

    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Look up or create users
    User(commands::user::UserArgs),
    /// List a guest's completed reservations
    Reservations(commands::reservations::ReservationsArgs),
    /// Search or create properties
    Properties(commands::properties::PropertiesArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    tracing_setup::init(&tracing_setup::TracingConfig { debug: cli.debug }).ok();

    let mut config = DbConfig::load()?;
    if let Some(url) = cli.database_url {
        config.database_url = url;
    }

    let db = Database::connect(&config)
        .await
        .context("Failed to connect to the LightBnB database")?;

    let result = match cli.command {
        Commands::User(args) => commands::user::run(&db, args).await,
        Commands::Reservations(args) => commands::reservations::run(&db, args).await,
        Commands::Properties(args) => commands::properties::run(&db, args).await,
    };

    db.close().await;
    debug!(ok = result.is_ok(), "command finished");
    result
}
