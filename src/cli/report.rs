//! CLI commands for summaries and monthly reports

use clap::Args;

use crate::display::{format_monthly_report, format_summary};
use crate::error::LedgerResult;
use crate::models::{Month, RateTable};
use crate::reports::MonthlyReport;
use crate::services::{aggregate, filter};
use crate::storage::LedgerStore;

use super::transaction::ListArgs;

/// Arguments for `budget report`
#[derive(Args, Debug)]
pub struct ReportArgs {
    /// Month to report on (YYYY-MM, defaults to the current month)
    pub month: Option<Month>,

    /// Display currency (defaults to the configured currency)
    #[arg(short, long)]
    pub currency: Option<String>,
}

/// Handle `budget summary`: aggregated totals over the filtered ledger
pub fn handle_summary(
    store: &LedgerStore,
    rates: &RateTable,
    currency: &str,
    args: ListArgs,
) -> LedgerResult<()> {
    let symbol = rates.symbol(currency)?;
    let filtered = filter(store.transactions(), args.kind, args.month);
    let summary = aggregate(&filtered);
    print!("{}", format_summary(&summary, symbol));
    Ok(())
}

/// Handle `budget report`: the full monthly report
pub fn handle_report(
    store: &LedgerStore,
    rates: &RateTable,
    default_currency: &str,
    args: ReportArgs,
) -> LedgerResult<()> {
    let month = args.month.unwrap_or_else(Month::current);
    let currency = args.currency.as_deref().unwrap_or(default_currency);
    let symbol = rates.symbol(currency)?;

    let report = MonthlyReport::build(store.transactions(), month, rates, currency)?;
    print!("{}", format_monthly_report(&report, symbol));
    Ok(())
}
