//! Transaction display formatting
//!
//! Formats ledger entries for terminal display as an indexed register.
//! The index column doubles as the delete handle.

use crate::models::{category, Transaction};

/// Format a single transaction as a register row
///
/// `date_format` is the user's configured strftime pattern.
pub fn format_transaction_row(
    index: usize,
    txn: &Transaction,
    symbol: &str,
    date_format: &str,
) -> String {
    let sign = if txn.is_income() { "+" } else { "-" };
    let description = if txn.description.is_empty() {
        "-"
    } else {
        &txn.description
    };

    format!(
        "{:>4}  {:10}  {:7}  {:15}  {:25}  {}{}",
        index,
        txn.date.format(date_format).to_string(),
        txn.kind.to_string(),
        truncate(&category::display_name(&txn.category), 15),
        truncate(description, 25),
        sign,
        txn.amount.format_with_symbol(symbol)
    )
}

/// Format a list of transactions as a register
pub fn format_register(transactions: &[Transaction], symbol: &str, date_format: &str) -> String {
    if transactions.is_empty() {
        return "No transactions found. Try changing your filters.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:>4}  {:10}  {:7}  {:15}  {:25}  {}\n",
        "#", "Date", "Type", "Category", "Description", "Amount"
    ));
    output.push_str(&"-".repeat(80));
    output.push('\n');

    for (index, txn) in transactions.iter().enumerate() {
        output.push_str(&format_transaction_row(index, txn, symbol, date_format));
        output.push('\n');
    }

    output
}

/// Truncate a string to a maximum length, padding short ones
fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        format!("{:width$}", s, width = max_len)
    } else {
        let cut: String = s.chars().take(max_len - 3).collect();
        format!("{}...", cut)
    }
}
