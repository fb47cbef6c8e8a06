//! Report generation
//!
//! Structured reporting over the ledger. Reports produce data, not text;
//! see `display` for terminal rendering.

pub mod monthly;

pub use monthly::{MonthlyReport, MonthlySummary, TOP_EXPENSE_COUNT};
