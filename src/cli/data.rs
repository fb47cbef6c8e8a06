//! CLI commands for data import/export and clearing

use std::fs;
use std::path::PathBuf;

use crate::config::{BudgetPaths, Settings};
use crate::error::{LedgerError, LedgerResult};
use crate::storage::LedgerStore;

/// Handle `budget export`
///
/// Writes the ledger as a pretty-printed JSON array. Without an explicit
/// path the file is named with the current date.
pub fn handle_export(store: &LedgerStore, output: Option<PathBuf>) -> LedgerResult<()> {
    let output = output.unwrap_or_else(default_export_path);

    let json = store.export_json()?;
    fs::write(&output, json)
        .map_err(|e| LedgerError::Storage(format!("Failed to write {}: {}", output.display(), e)))?;

    println!(
        "Exported {} transactions to {}",
        store.len(),
        output.display()
    );
    Ok(())
}

/// Handle `budget import`
///
/// The file must contain a JSON array of transaction records; anything else
/// is rejected and the ledger is left unchanged.
pub fn handle_import(store: &mut LedgerStore, file: PathBuf) -> LedgerResult<()> {
    let payload = fs::read_to_string(&file)
        .map_err(|e| LedgerError::Io(format!("Failed to read {}: {}", file.display(), e)))?;

    let count = store.import_json(&payload)?;
    println!("Imported {} transactions from {}", count, file.display());
    Ok(())
}

/// Handle `budget clear`
pub fn handle_clear(store: &mut LedgerStore, yes: bool) -> LedgerResult<()> {
    if !yes {
        println!("This removes all transactions. Re-run with --yes to confirm.");
        return Ok(());
    }

    let count = store.len();
    store.clear()?;
    println!("Cleared {} transactions.", count);
    Ok(())
}

/// Handle `budget config`
pub fn handle_config(paths: &BudgetPaths, settings: &Settings) {
    println!("Budget Tracker Configuration");
    println!("============================");
    println!("Base directory: {}", paths.base_dir().display());
    println!("Ledger file:    {}", paths.ledger_file().display());
    println!("Settings file:  {}", paths.settings_file().display());
    println!();
    println!("Settings:");
    println!("  Currency:    {}", settings.currency);
    println!("  Date format: {}", settings.date_format);
}

fn default_export_path() -> PathBuf {
    let today = chrono::Local::now().date_naive();
    PathBuf::from(format!("budget-tracker-{}.json", today.format("%Y-%m-%d")))
}
