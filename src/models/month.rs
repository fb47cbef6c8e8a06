//! Calendar month period ("YYYY-MM")
//!
//! Reporting and filtering operate on whole calendar months. Parsing the
//! month up front gives calendar-aware comparison (leap years included)
//! instead of raw string-prefix matching on dates.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};

use crate::error::LedgerError;

/// A specific calendar month of a specific year
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Month {
    year: i32,
    month: u32,
}

impl Month {
    /// Create a month, validating the month number
    pub fn new(year: i32, month: u32) -> Result<Self, LedgerError> {
        if !(1..=12).contains(&month) {
            return Err(LedgerError::Config(format!(
                "Invalid month number: {}",
                month
            )));
        }
        Ok(Self { year, month })
    }

    /// The month containing the given date
    pub fn of(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// The current calendar month
    pub fn current() -> Self {
        Self::of(chrono::Local::now().date_naive())
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// Check whether a date falls inside this month
    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }

    /// Number of days in this month, accounting for leap years
    pub fn days(&self) -> u32 {
        let first = self.first_day();
        let next = if self.month == 12 {
            NaiveDate::from_ymd_opt(self.year + 1, 1, 1)
        } else {
            NaiveDate::from_ymd_opt(self.year, self.month + 1, 1)
        };
        // Both dates are valid by construction
        next.map(|n| (n - first).num_days() as u32).unwrap_or(30)
    }

    /// First day of the month
    pub fn first_day(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
            .expect("month validated at construction")
    }

    /// Human-readable name, e.g. "March 2024"
    pub fn long_name(&self) -> String {
        self.first_day().format("%B %Y").to_string()
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for Month {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (year_str, month_str) = s
            .split_once('-')
            .ok_or_else(|| LedgerError::Config(format!("Invalid month format: {}", s)))?;

        let year: i32 = year_str
            .parse()
            .map_err(|_| LedgerError::Config(format!("Invalid month format: {}", s)))?;
        let month: u32 = month_str
            .parse()
            .map_err(|_| LedgerError::Config(format!("Invalid month format: {}", s)))?;

        Self::new(year, month)
    }
}
