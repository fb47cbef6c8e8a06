//! Transaction filtering
//!
//! Pure, order-preserving selection over the ledger by entry kind and
//! calendar month. Month matching compares parsed dates, not string
//! prefixes, so only records genuinely inside the month are kept.

use clap::ValueEnum;

use crate::models::{Month, Transaction, TransactionKind};

/// Which entry kinds to keep
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum TypeFilter {
    #[default]
    All,
    Income,
    Expense,
}

impl TypeFilter {
    fn matches(&self, kind: TransactionKind) -> bool {
        match self {
            Self::All => true,
            Self::Income => kind == TransactionKind::Income,
            Self::Expense => kind == TransactionKind::Expense,
        }
    }
}

/// Select the subsequence matching the filters, preserving ledger order
pub fn filter(
    transactions: &[Transaction],
    type_filter: TypeFilter,
    month: Option<Month>,
) -> Vec<Transaction> {
    transactions
        .iter()
        .filter(|t| type_filter.matches(t.kind))
        .filter(|t| month.map_or(true, |m| m.contains(t.date)))
        .cloned()
        .collect()
}
