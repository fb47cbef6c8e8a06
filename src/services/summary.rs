//! Aggregation over transaction sequences
//!
//! Computes income/expense totals, the balance, and per-category rollups
//! split by kind. All accumulation is exact integer-cent arithmetic;
//! rounding to two digits only ever happens at presentation time.

use crate::models::{Money, Transaction, TransactionKind};

/// One category's accumulated total
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryTotal {
    pub category: String,
    pub total: Money,
}

/// Aggregated totals over a transaction sequence
#[derive(Debug, Clone, Default)]
pub struct Summary {
    pub total_income: Money,
    pub total_expense: Money,
    pub balance: Money,
    /// Income rollup per category, in first-encountered order
    pub income_by_category: Vec<CategoryTotal>,
    /// Expense rollup per category, in first-encountered order
    pub expense_by_category: Vec<CategoryTotal>,
}

/// Aggregate a transaction sequence into a summary
///
/// The two category rollups are independent: a code used under both kinds
/// accumulates separately in each (no cross-validation is performed).
pub fn aggregate(transactions: &[Transaction]) -> Summary {
    let mut summary = Summary::default();

    for txn in transactions {
        let (total, rollup) = match txn.kind {
            TransactionKind::Income => {
                (&mut summary.total_income, &mut summary.income_by_category)
            }
            TransactionKind::Expense => {
                (&mut summary.total_expense, &mut summary.expense_by_category)
            }
        };

        *total += txn.amount;
        match rollup.iter_mut().find(|c| c.category == txn.category) {
            Some(entry) => entry.total += txn.amount,
            None => rollup.push(CategoryTotal {
                category: txn.category.clone(),
                total: txn.amount,
            }),
        }
    }

    summary.balance = summary.total_income - summary.total_expense;
    summary
}
