use anyhow::{Context, Result};
use confyg::{env, Confygery};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Configuration for folio.
///
/// Configuration is loaded from multiple sources with the following priority:
/// 1. CLI arguments (highest priority)
/// 2. Environment variables (FOLIO_* prefix)
/// 3. Config file (~/.config/folio/config.toml)
/// 4. Built-in defaults (lowest priority)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Path to the SQLite database.
    ///
    /// Can be set via:
    /// - CLI: --db /path/to/db
    /// - ENV: FOLIO_DATABASE_PATH
    /// - Config: database_path = "/path/to/db"
    /// - Default: ~/.local/share/folio/folio.db
    #[serde(default = "default_db_path")]
    pub database_path: PathBuf,

    /// Rows per page in every paginated listing.
    #[serde(default = "default_items_per_page")]
    pub items_per_page: usize,

    /// Days until a borrowed copy is due back.
    #[serde(default = "default_loan_period_days")]
    pub loan_period_days: u64,

    /// Fine charged per day overdue.
    #[serde(default = "default_daily_fine_rate")]
    pub daily_fine_rate: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_path: default_db_path(),
            items_per_page: default_items_per_page(),
            loan_period_days: default_loan_period_days(),
            daily_fine_rate: default_daily_fine_rate(),
        }
    }
}

impl Config {
    /// Load configuration from file and environment variables.
    ///
    /// Searches for config file at: ~/.config/folio/config.toml
    /// Reads environment variables with FOLIO_ prefix.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed.
    pub fn load() -> Result<Self> {
        let config_path = config_file_path();

        let mut builder = Confygery::new().context("Failed to create config builder")?;

        if config_path.exists() {
            let path_str = config_path
                .to_str()
                .ok_or_else(|| anyhow::anyhow!("Config path contains invalid UTF-8"))?;
            builder
                .add_file(path_str)
                .context("Failed to load config file")?;
        }

        let env_opts = env::Options::with_top_level("folio");
        builder
            .add_env(env_opts)
            .context("Failed to load environment variables")?;

        let config: Self = builder.build().context("Failed to build configuration")?;

        Ok(config)
    }

    /// Load configuration with custom database path.
    ///
    /// This is used when the --db CLI flag is provided.
    pub fn load_with_db_path(db_path: PathBuf) -> Result<Self> {
        let mut config = Self::load()?;
        config.database_path = db_path;
        Ok(config)
    }
}

/// Get the default database path.
///
/// Returns: ~/.local/share/folio/folio.db (or platform equivalent)
fn default_db_path() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("folio")
        .join("folio.db")
}

const fn default_items_per_page() -> usize {
    5
}

const fn default_loan_period_days() -> u64 {
    14
}

const fn default_daily_fine_rate() -> f64 {
    0.50
}

/// Get the config file path.
///
/// Returns:
/// - Linux: ~/.config/folio/config.toml
/// - macOS: ~/Library/Application Support/folio/config.toml
/// - Windows: %APPDATA%\folio\config.toml
pub fn config_file_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("folio")
        .join("config.toml")
}

/// Get the example config file content.
pub fn example_config() -> &'static str {
    r#"# Folio Configuration File
#
# Configuration is loaded from multiple sources with the following priority:
# 1. CLI arguments (highest priority)
# 2. Environment variables (FOLIO_* prefix)
# 3. This config file
# 4. Built-in defaults (lowest priority)

# Path to the SQLite database
#
# Can also be set via:
# - CLI: folio --db /custom/path.db
# - Environment: FOLIO_DATABASE_PATH=/custom/path.db
#
# Default: Platform-specific data directory
#database_path = "/path/to/custom/folio.db"

# Rows per page in listings (catalog, events, librarians, open loans)
#items_per_page = 5

# Days until a borrowed copy is due back
#loan_period_days = 14

# Fine charged per day a copy is overdue
#daily_fine_rate = 0.50
"#
}

/// Create default config file if it doesn't exist.
///
/// Returns true if a new file was created, false if it already existed.
pub fn ensure_config_file() -> Result<bool> {
    let config_path = config_file_path();

    if config_path.exists() {
        return Ok(false);
    }

    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent).context("Failed to create config directory")?;
    }

    std::fs::write(&config_path, example_config()).context("Failed to write config file")?;

    Ok(true)
}
