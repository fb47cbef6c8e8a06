//! Exchange rate table
//!
//! Fixed multipliers expressing units of each currency per one US dollar.
//! The table is static for a session; the base entry (USD) is always 1.0.

use crate::error::{LedgerError, LedgerResult};

/// The base currency all rates are expressed against
pub const BASE_CURRENCY: &str = "USD";

/// One currency in the rate table
#[derive(Debug, Clone, PartialEq)]
pub struct CurrencyEntry {
    /// ISO-style code, e.g. "EUR"
    pub code: &'static str,
    /// Display symbol, e.g. "€"
    pub symbol: &'static str,
    /// Units of this currency per one unit of the base currency
    pub rate: f64,
}

/// Fixed table of session exchange rates
#[derive(Debug, Clone)]
pub struct RateTable {
    entries: Vec<CurrencyEntry>,
}

impl RateTable {
    /// Build a table from entries; the base currency must be present at 1.0
    pub fn new(entries: Vec<CurrencyEntry>) -> LedgerResult<Self> {
        let base = entries
            .iter()
            .find(|e| e.code == BASE_CURRENCY)
            .ok_or_else(|| {
                LedgerError::Config(format!("Rate table is missing the base currency {}", BASE_CURRENCY))
            })?;
        if base.rate != 1.0 {
            return Err(LedgerError::Config(format!(
                "Base currency {} must have rate 1.0, got {}",
                BASE_CURRENCY, base.rate
            )));
        }
        Ok(Self { entries })
    }

    /// Look up a currency, or fail with `UnknownCurrency`
    pub fn get(&self, code: &str) -> LedgerResult<&CurrencyEntry> {
        self.entries
            .iter()
            .find(|e| e.code == code)
            .ok_or_else(|| LedgerError::UnknownCurrency(code.to_string()))
    }

    /// Check whether a code is present
    pub fn contains(&self, code: &str) -> bool {
        self.entries.iter().any(|e| e.code == code)
    }

    /// All entries, in table order
    pub fn entries(&self) -> &[CurrencyEntry] {
        &self.entries
    }

    /// Display symbol for a code, or fail with `UnknownCurrency`
    pub fn symbol(&self, code: &str) -> LedgerResult<&'static str> {
        self.get(code).map(|e| e.symbol)
    }
}

impl Default for RateTable {
    fn default() -> Self {
        let entries = vec![
            CurrencyEntry { code: "USD", symbol: "$", rate: 1.0 },
            CurrencyEntry { code: "EUR", symbol: "€", rate: 0.9250 },
            CurrencyEntry { code: "GBP", symbol: "£", rate: 0.7900 },
            CurrencyEntry { code: "JPY", symbol: "¥", rate: 147.50 },
            CurrencyEntry { code: "CAD", symbol: "C$", rate: 1.3500 },
            CurrencyEntry { code: "AUD", symbol: "A$", rate: 1.5500 },
            CurrencyEntry { code: "MYR", symbol: "RM", rate: 4.6500 },
        ];
        Self::new(entries).expect("default rate table is well-formed")
    }
}
