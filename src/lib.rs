//! Budget Tracker - command-line personal finance ledger
//!
//! Records income and expense transactions in a local JSON ledger, computes
//! running totals and per-category breakdowns, converts amounts between
//! currencies at fixed session rates, and builds monthly summary reports.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (money, transactions, months, rates)
//! - `storage`: JSON file storage layer and the ledger store
//! - `services`: Pure ledger logic (filter, aggregate, convert)
//! - `reports`: Monthly report builder
//! - `display`: Terminal rendering of computed data
//! - `cli`: Command handlers

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{LedgerError, LedgerResult};
