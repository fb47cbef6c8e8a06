//! Transaction model
//!
//! A ledger entry: dated income or expense with a category code, a strictly
//! positive amount, and an optional description. Entries carry no synthetic
//! identifier; their position in the ledger is their handle.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::money::Money;
use crate::error::{LedgerError, LedgerResult};

/// Whether a transaction adds to or subtracts from the balance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    Expense,
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Income => write!(f, "Income"),
            Self::Expense => write!(f, "Expense"),
        }
    }
}

/// A single ledger entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Transaction date
    pub date: NaiveDate,

    /// Income or expense
    #[serde(rename = "type")]
    pub kind: TransactionKind,

    /// Category code (open set; unknown codes get default display metadata)
    pub category: String,

    /// Amount, strictly positive for both kinds
    pub amount: Money,

    /// Optional free-text note
    #[serde(default)]
    pub description: String,
}

impl Transaction {
    /// Create a new transaction, validating the amount
    pub fn new(
        date: NaiveDate,
        kind: TransactionKind,
        category: impl Into<String>,
        amount: Money,
    ) -> LedgerResult<Self> {
        let txn = Self {
            date,
            kind,
            category: category.into(),
            amount,
            description: String::new(),
        };
        txn.validate()?;
        Ok(txn)
    }

    /// Attach a description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Validate the amount invariant (`amount > 0`)
    pub fn validate(&self) -> LedgerResult<()> {
        if !self.amount.is_positive() {
            return Err(LedgerError::invalid_amount(self.amount.to_string()));
        }
        Ok(())
    }

    /// Check if this is an income entry
    pub fn is_income(&self) -> bool {
        self.kind == TransactionKind::Income
    }

    /// Check if this is an expense entry
    pub fn is_expense(&self) -> bool {
        self.kind == TransactionKind::Expense
    }

    /// The signed contribution of this entry to a balance
    pub fn signed_amount(&self) -> Money {
        match self.kind {
            TransactionKind::Income => self.amount,
            TransactionKind::Expense => -self.amount,
        }
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.date.format("%Y-%m-%d"),
            self.kind,
            self.category,
            self.amount
        )
    }
}
