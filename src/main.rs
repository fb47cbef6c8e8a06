use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use budget_tracker::cli::{
    handle_add, handle_clear, handle_config, handle_convert, handle_delete, handle_export,
    handle_import, handle_list, handle_report, handle_summary, AddArgs, ConvertArgs, ListArgs,
    ReportArgs,
};
use budget_tracker::config::{BudgetPaths, Settings};
use budget_tracker::models::RateTable;
use budget_tracker::storage::LedgerStore;

#[derive(Parser)]
#[command(
    name = "budget",
    version,
    about = "Command-line personal budget tracker",
    long_about = "Budget Tracker records income and expense transactions in a local \
                  JSON ledger, computes totals and category breakdowns, converts \
                  between currencies at fixed rates, and builds monthly reports."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a transaction to the ledger
    Add(AddArgs),

    /// List transactions, optionally filtered by type and month
    #[command(alias = "ls")]
    List(ListArgs),

    /// Delete the transaction at a register index
    #[command(alias = "rm")]
    Delete {
        /// 0-based index as shown by `budget list`
        index: usize,
    },

    /// Show totals and category breakdowns for the filtered ledger
    Summary(ListArgs),

    /// Build the monthly report
    Report(ReportArgs),

    /// Convert an amount between currencies at the fixed session rates
    Convert(ConvertArgs),

    /// Export the ledger as a JSON file
    Export {
        /// Output path (defaults to budget-tracker-<today>.json)
        output: Option<PathBuf>,
    },

    /// Replace the ledger with transactions from a JSON file
    Import {
        /// Path to a JSON array of transactions
        file: PathBuf,
    },

    /// Remove all transactions and the persisted ledger file
    Clear {
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let paths = BudgetPaths::new()?;
    paths.ensure_directories()?;
    let settings = Settings::load_or_create(&paths)?;
    let rates = RateTable::default();

    let mut store = LedgerStore::open(paths.ledger_file());

    match cli.command {
        Commands::Add(args) => handle_add(&mut store, args)?,
        Commands::List(args) => handle_list(&store, &rates, &settings, args)?,
        Commands::Delete { index } => handle_delete(&mut store, index)?,
        Commands::Summary(args) => handle_summary(&store, &rates, &settings.currency, args)?,
        Commands::Report(args) => handle_report(&store, &rates, &settings.currency, args)?,
        Commands::Convert(args) => handle_convert(&rates, args)?,
        Commands::Export { output } => handle_export(&store, output)?,
        Commands::Import { file } => handle_import(&mut store, file)?,
        Commands::Clear { yes } => handle_clear(&mut store, yes)?,
        Commands::Config => handle_config(&paths, &settings),
    }

    Ok(())
}
