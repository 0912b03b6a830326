use anyhow::Result;
use clap::Parser;
use folio_core::schema::Database;
use std::path::PathBuf;

use folio::commands;
use folio::config::Config;
use folio::console::Console;
use folio::menu::{Menu, MenuOptions};

#[derive(Debug, Parser)]
#[command(name = "folio", version, about)]
struct Cli {
    /// With no subcommand, folio opens the interactive menu.
    #[command(subcommand)]
    command: Option<Commands>,

    /// Path to the database (default: ~/.local/share/folio/folio.db)
    #[arg(long, global = true)]
    db: Option<PathBuf>,
}

#[derive(Debug, clap::Subcommand)]
enum Commands {
    /// Show row counts for the database
    Status,
    /// Fill a fresh database with a demo catalog, events, and staff
    Seed {
        /// Seed even when the database already has data
        #[arg(long)]
        force: bool,
    },
    /// Inspect or create the configuration file
    Config {
        #[command(subcommand)]
        action: commands::ConfigAction,
    },
}

fn main() -> Result<()> {
    // Interactive menus own stdout; logs go to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = match cli.db {
        Some(db) => Config::load_with_db_path(db)?,
        None => Config::load()?,
    };

    // Ensure database directory exists
    if let Some(parent) = config.database_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    match cli.command {
        Some(Commands::Status) => commands::show_status(&config)?,
        Some(Commands::Seed { force }) => commands::run_seed(&config, force)?,
        Some(Commands::Config { action }) => commands::run_config(action)?,
        None => {
            let db = Database::open(&config.database_path)?;
            tracing::info!("Opened database at {}", config.database_path.display());

            let mut ui = Console::stdio();
            Menu::new(&db, &mut ui, MenuOptions::from(&config)).run()?;
        }
    }

    Ok(())
}
