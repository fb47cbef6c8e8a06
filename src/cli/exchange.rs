//! CLI command for currency conversion

use clap::Args;

use crate::error::{LedgerError, LedgerResult};
use crate::models::{Money, RateTable};
use crate::services::exchange::convert;

/// Arguments for `budget convert`
#[derive(Args, Debug)]
pub struct ConvertArgs {
    /// Amount to convert, e.g. 100.00
    pub amount: String,

    /// Source currency code
    pub from: String,

    /// Target currency code
    pub to: String,

    /// Convert in the opposite direction instead
    #[arg(long)]
    pub swap: bool,
}

/// Handle `budget convert`
pub fn handle_convert(rates: &RateTable, args: ConvertArgs) -> LedgerResult<()> {
    let amount = Money::parse(&args.amount)
        .map_err(|_| LedgerError::invalid_amount(args.amount.clone()))?;

    let (from, to) = if args.swap {
        (args.to.as_str(), args.from.as_str())
    } else {
        (args.from.as_str(), args.to.as_str())
    };

    let conversion = convert(amount, from, to, rates)?;
    let from_symbol = rates.symbol(from)?;
    let to_symbol = rates.symbol(to)?;

    println!(
        "{} = {}",
        amount.format_with_symbol(from_symbol),
        conversion.converted.format_with_symbol(to_symbol)
    );
    println!("1 {} = {:.4} {}", from, conversion.rate, to);
    Ok(())
}
