//! Storage layer for the budget tracker
//!
//! Provides JSON file storage with atomic writes and automatic directory
//! creation. The whole ledger is one file holding a serialized array of
//! transaction records.

pub mod file_io;
pub mod ledger;

pub use file_io::{read_json, write_json_atomic};
pub use ledger::LedgerStore;
