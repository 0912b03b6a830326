use anyhow::Result;
use folio_core::schema::Database;

use crate::config::Config;

/// Row counts for a quick database health view.
pub fn show_status(config: &Config) -> Result<()> {
    let db = Database::open(&config.database_path)?;

    let count = |sql: &str| -> Result<i64> {
        Ok(db.conn().query_row(sql, [], |row| row.get(0))?)
    };

    let items = count("SELECT COUNT(*) FROM items")?;
    let on_shelf = count("SELECT COUNT(*) FROM copies WHERE status = 'onShelf'")?;
    let copies = count("SELECT COUNT(*) FROM copies")?;
    let borrowers = count("SELECT COUNT(*) FROM borrowers")?;
    let open_loans = count("SELECT COUNT(*) FROM loans WHERE return_date IS NULL")?;
    let events = count("SELECT COUNT(*) FROM events")?;
    let personnel = count("SELECT COUNT(*) FROM personnel")?;

    println!("\nFolio Status\n");
    println!("  Database: {}", config.database_path.display());
    println!("  Catalog items: {items}");
    println!("  Copies: {copies} ({on_shelf} on shelf)");
    println!("  Borrowers: {borrowers}");
    println!("  Open loans: {open_loans}");
    println!("  Events: {events}");
    println!("  Personnel: {personnel}");

    if items == 0 {
        println!("\n  Empty catalog. Run `folio seed` for a demo dataset.");
    }

    Ok(())
}
