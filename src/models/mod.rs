//! Core data models for the budget tracker
//!
//! This module contains the data structures that represent the ledger
//! domain: monetary amounts, transactions, calendar months, category
//! metadata, and the exchange rate table.

pub mod category;
pub mod currency;
pub mod money;
pub mod month;
pub mod transaction;

pub use currency::{CurrencyEntry, RateTable, BASE_CURRENCY};
pub use money::Money;
pub use month::Month;
pub use transaction::{Transaction, TransactionKind};
