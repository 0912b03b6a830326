use anyhow::Result;
use folio_core::schema::Database;

use crate::config::Config;

/// Fill a fresh database with the demo catalog, events, and staff.
pub fn run_seed(config: &Config, force: bool) -> Result<()> {
    let db = Database::open(&config.database_path)?;

    if !db.is_empty()? && !force {
        println!(
            "Database at {} already has data; pass --force to seed anyway.",
            config.database_path.display()
        );
        return Ok(());
    }

    let summary = db.seed_demo()?;
    println!(
        "Seeded {} items ({} copies), {} events, {} personnel.",
        summary.items, summary.copies, summary.events, summary.personnel
    );
    Ok(())
}
