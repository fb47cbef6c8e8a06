//! CLI commands for ledger entries
//!
//! Add, list, and delete handlers, bridging clap argument parsing with the
//! ledger store and the filter service.

use chrono::NaiveDate;
use clap::{Args, ValueEnum};

use crate::config::Settings;
use crate::display::format_register;
use crate::error::{LedgerError, LedgerResult};
use crate::models::{Money, Month, RateTable, Transaction, TransactionKind};
use crate::services::{filter, TypeFilter};
use crate::storage::LedgerStore;

/// Entry kind as a CLI argument
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum KindArg {
    Income,
    Expense,
}

impl From<KindArg> for TransactionKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Income => TransactionKind::Income,
            KindArg::Expense => TransactionKind::Expense,
        }
    }
}

/// Arguments for `budget add`
#[derive(Args, Debug)]
pub struct AddArgs {
    /// Transaction date (YYYY-MM-DD, defaults to today)
    #[arg(short, long)]
    pub date: Option<NaiveDate>,

    /// Entry kind
    #[arg(short = 't', long = "type", value_enum)]
    pub kind: KindArg,

    /// Category code (e.g. salary, food)
    #[arg(short, long)]
    pub category: String,

    /// Amount, e.g. 150.00
    #[arg(short, long)]
    pub amount: String,

    /// Free-text note
    #[arg(long)]
    pub description: Option<String>,
}

/// Arguments for `budget list` and `budget summary`
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Keep only entries of this kind
    #[arg(short = 't', long = "type", value_enum, default_value = "all")]
    pub kind: TypeFilter,

    /// Keep only entries in this month (YYYY-MM)
    #[arg(short, long)]
    pub month: Option<Month>,
}

/// Handle `budget add`
pub fn handle_add(store: &mut LedgerStore, args: AddArgs) -> LedgerResult<()> {
    let amount = Money::parse(&args.amount)
        .map_err(|_| LedgerError::invalid_amount(args.amount.clone()))?;

    let date = args
        .date
        .unwrap_or_else(|| chrono::Local::now().date_naive());

    let mut txn = Transaction::new(date, args.kind.into(), args.category, amount)?;
    if let Some(description) = args.description {
        txn = txn.with_description(description);
    }

    let display = txn.to_string();
    store.add(txn)?;

    println!("Added: {}", display);
    Ok(())
}

/// Handle `budget list`
pub fn handle_list(
    store: &LedgerStore,
    rates: &RateTable,
    settings: &Settings,
    args: ListArgs,
) -> LedgerResult<()> {
    let symbol = rates.symbol(&settings.currency)?;
    let filtered = filter(store.transactions(), args.kind, args.month);
    print!(
        "{}",
        format_register(&filtered, symbol, &settings.date_format)
    );
    Ok(())
}

/// Handle `budget delete`
///
/// A stale index (out of range) is a warning and a no-op, not a failure:
/// the register the user looked at may predate another delete.
pub fn handle_delete(store: &mut LedgerStore, index: usize) -> LedgerResult<()> {
    match store.remove_at(index) {
        Ok(removed) => {
            println!("Deleted: {}", removed);
            Ok(())
        }
        Err(err) if err.is_out_of_range() => {
            log::warn!("Ignoring delete with stale index: {}", err);
            println!("Nothing deleted: {}", err);
            Ok(())
        }
        Err(err) => Err(err),
    }
}
