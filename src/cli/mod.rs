//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the ledger layers.

pub mod data;
pub mod exchange;
pub mod report;
pub mod transaction;

pub use data::{handle_clear, handle_config, handle_export, handle_import};
pub use exchange::{handle_convert, ConvertArgs};
pub use report::{handle_report, handle_summary, ReportArgs};
pub use transaction::{handle_add, handle_delete, handle_list, AddArgs, ListArgs};
