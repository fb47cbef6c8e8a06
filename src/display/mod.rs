//! Terminal display formatting
//!
//! Renders computed ledger data as plain text. Nothing in here mutates
//! state or computes figures; it consumes the structured outputs of the
//! service and report layers.

pub mod report;
pub mod summary;
pub mod transaction;

pub use report::format_monthly_report;
pub use summary::format_summary;
pub use transaction::format_register;
