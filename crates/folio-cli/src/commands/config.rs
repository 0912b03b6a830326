use anyhow::{Context, Result};

use crate::config::{self, Config};

/// `folio config <action>`.
#[derive(Debug, clap::Subcommand)]
pub enum ConfigAction {
    /// Show the current effective configuration
    Show,
    /// Create the config file with commented defaults
    Init,
    /// Print the config file path
    Path,
}

pub fn run_config(action: ConfigAction) -> Result<()> {
    match action {
        ConfigAction::Show => show_config(),
        ConfigAction::Init => init_config(),
        ConfigAction::Path => {
            println!("{}", config::config_file_path().display());
            Ok(())
        }
    }
}

/// Show the current effective configuration.
fn show_config() -> Result<()> {
    let config = Config::load()?;

    println!("Current Configuration");
    println!("=====================\n");

    let config_path = config::config_file_path();
    println!("Config file: {}", config_path.display());
    println!(
        "File exists: {}\n",
        if config_path.exists() {
            "yes"
        } else {
            "no (using defaults)"
        }
    );

    println!("Settings:");
    println!("  database_path: {}", config.database_path.display());
    println!("  items_per_page: {}", config.items_per_page);
    println!("  loan_period_days: {}", config.loan_period_days);
    println!("  daily_fine_rate: {:.2}", config.daily_fine_rate);

    println!("\nPriority: CLI args > ENV vars (FOLIO_*) > Config file > Defaults");

    Ok(())
}

/// Create the config file if it doesn't exist yet.
fn init_config() -> Result<()> {
    let created = config::ensure_config_file().context("Failed to create config file")?;
    let path = config::config_file_path();
    if created {
        println!("Created {}", path.display());
    } else {
        println!("Config file already exists: {}", path.display());
    }
    Ok(())
}
