//! Monthly report
//!
//! Composes filtering and aggregation for one calendar month, then derives
//! the savings rate, the average daily expense (leap-aware day count), and
//! descending category rankings. Produces structured data only; terminal
//! rendering lives in `display::report`.

use crate::error::LedgerResult;
use crate::models::{Money, Month, RateTable, Transaction};
use crate::services::filter::{filter, TypeFilter};
use crate::services::summary::{aggregate, CategoryTotal};

/// How many expense categories the chart-oriented ranking exposes
pub const TOP_EXPENSE_COUNT: usize = 5;

/// A month's report: either computed figures or an explicit no-data marker
#[derive(Debug, Clone)]
pub enum MonthlyReport {
    /// No transactions fell inside the month
    NoData { month: Month },
    Ready(Box<MonthlySummary>),
}

/// Computed figures for a month with data
///
/// All monetary figures are expressed in the requested display currency,
/// converted from the base-currency amounts recorded in the ledger.
#[derive(Debug, Clone)]
pub struct MonthlySummary {
    pub month: Month,
    /// Display currency code
    pub currency: String,
    pub total_income: Money,
    pub total_expense: Money,
    pub balance: Money,
    /// Balance as a percentage of income (0 when there is no income)
    pub savings_rate: f64,
    /// Total expense spread over the month's calendar days
    pub avg_daily_expense: Money,
    /// Income rollup, descending by amount (stable on ties)
    pub income_by_category: Vec<CategoryTotal>,
    /// Expense rollup, descending by amount (stable on ties)
    pub expense_by_category: Vec<CategoryTotal>,
    pub transaction_count: usize,
}

impl MonthlyReport {
    /// Build the report for one month
    ///
    /// An empty month is a `NoData` report, not an error. An unknown
    /// display currency is rejected before any computation.
    pub fn build(
        transactions: &[Transaction],
        month: Month,
        rates: &RateTable,
        currency: &str,
    ) -> LedgerResult<Self> {
        // Units of the display currency per base unit
        let factor = rates.get(currency)?.rate;

        let in_month = filter(transactions, TypeFilter::All, Some(month));
        if in_month.is_empty() {
            return Ok(Self::NoData { month });
        }

        let summary = aggregate(&in_month);

        // Ratio of two amounts in the same currency; conversion-independent
        let savings_rate = if summary.total_income.is_zero() {
            0.0
        } else {
            summary.balance.cents() as f64 / summary.total_income.cents() as f64 * 100.0
        };

        let scale = |m: Money| Money::from_float(m.as_float() * factor);
        let total_expense = scale(summary.total_expense);
        let avg_daily_expense =
            Money::from_float(total_expense.as_float() / month.days() as f64);

        let rank = |mut rollup: Vec<CategoryTotal>| {
            for entry in &mut rollup {
                entry.total = scale(entry.total);
            }
            // Stable sort: ties keep first-encountered order
            rollup.sort_by(|a, b| b.total.cmp(&a.total));
            rollup
        };

        Ok(Self::Ready(Box::new(MonthlySummary {
            month,
            currency: currency.to_string(),
            total_income: scale(summary.total_income),
            total_expense,
            balance: scale(summary.balance),
            savings_rate,
            avg_daily_expense,
            income_by_category: rank(summary.income_by_category),
            expense_by_category: rank(summary.expense_by_category),
            transaction_count: in_month.len(),
        })))
    }

    pub fn is_no_data(&self) -> bool {
        matches!(self, Self::NoData { .. })
    }
}

impl MonthlySummary {
    /// The highest-spending categories, for charting
    pub fn top_expense_categories(&self) -> &[CategoryTotal] {
        let n = self.expense_by_category.len().min(TOP_EXPENSE_COUNT);
        &self.expense_by_category[..n]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LedgerError;
    use crate::models::TransactionKind;
    use chrono::NaiveDate;

    fn txn(date: &str, kind: TransactionKind, category: &str, cents: i64) -> Transaction {
        Transaction::new(
            date.parse::<NaiveDate>().unwrap(),
            kind,
            category,
            Money::from_cents(cents),
        )
        .unwrap()
    }

    fn sample_ledger() -> Vec<Transaction> {
        vec![
            txn("2024-03-05", TransactionKind::Income, "salary", 100000),
            txn("2024-03-10", TransactionKind::Expense, "food", 15000),
        ]
    }

    fn build(ledger: &[Transaction], month: &str, currency: &str) -> MonthlyReport {
        MonthlyReport::build(
            ledger,
            month.parse().unwrap(),
            &RateTable::default(),
            currency,
        )
        .unwrap()
    }

    fn unwrap_ready(report: MonthlyReport) -> MonthlySummary {
        match report {
            MonthlyReport::Ready(summary) => *summary,
            MonthlyReport::NoData { month } => panic!("unexpected no-data report for {}", month),
        }
    }

    #[test]
    fn test_savings_rate_from_balance_and_income() {
        let summary = unwrap_ready(build(&sample_ledger(), "2024-03", "USD"));

        assert_eq!(summary.total_income.cents(), 100000);
        assert_eq!(summary.total_expense.cents(), 15000);
        assert_eq!(summary.balance.cents(), 85000);
        assert!((summary.savings_rate - 85.0).abs() < 1e-9);
        assert_eq!(summary.transaction_count, 2);
    }

    #[test]
    fn test_month_without_transactions_is_no_data() {
        let report = build(&sample_ledger(), "2024-04", "USD");
        assert!(report.is_no_data());
    }

    #[test]
    fn test_savings_rate_zero_when_no_income() {
        let ledger = vec![txn("2024-03-10", TransactionKind::Expense, "food", 15000)];
        let summary = unwrap_ready(build(&ledger, "2024-03", "USD"));
        assert_eq!(summary.savings_rate, 0.0);
        assert!(summary.balance.is_negative());
    }

    #[test]
    fn test_avg_daily_expense_uses_calendar_days() {
        // March has 31 days: 3100.00 / 31 = 100.00
        let ledger = vec![txn("2024-03-10", TransactionKind::Expense, "food", 310000)];
        let summary = unwrap_ready(build(&ledger, "2024-03", "USD"));
        assert_eq!(summary.avg_daily_expense.cents(), 10000);
    }

    #[test]
    fn test_avg_daily_expense_leap_february() {
        // February 2024 has 29 days: 290.00 / 29 = 10.00
        let ledger = vec![txn("2024-02-10", TransactionKind::Expense, "food", 29000)];
        let summary = unwrap_ready(build(&ledger, "2024-02", "USD"));
        assert_eq!(summary.avg_daily_expense.cents(), 1000);
    }

    #[test]
    fn test_categories_ranked_descending_with_stable_ties() {
        let ledger = vec![
            txn("2024-03-01", TransactionKind::Expense, "transport", 2000),
            txn("2024-03-02", TransactionKind::Expense, "food", 5000),
            txn("2024-03-03", TransactionKind::Expense, "shopping", 2000),
        ];

        let summary = unwrap_ready(build(&ledger, "2024-03", "USD"));
        let order: Vec<_> = summary
            .expense_by_category
            .iter()
            .map(|c| c.category.as_str())
            .collect();
        // food first; transport before shopping (tie broken by encounter order)
        assert_eq!(order, ["food", "transport", "shopping"]);
    }

    #[test]
    fn test_top_expense_categories_capped_at_five() {
        let categories = ["food", "transport", "housing", "utilities", "health", "shopping"];
        let ledger: Vec<_> = categories
            .iter()
            .enumerate()
            .map(|(i, cat)| {
                txn("2024-03-10", TransactionKind::Expense, cat, (i as i64 + 1) * 1000)
            })
            .collect();

        let summary = unwrap_ready(build(&ledger, "2024-03", "USD"));
        let top = summary.top_expense_categories();
        assert_eq!(top.len(), 5);
        assert_eq!(top[0].category, "shopping");
        assert_eq!(top[4].category, "transport");
    }

    #[test]
    fn test_display_currency_conversion() {
        let summary = unwrap_ready(build(&sample_ledger(), "2024-03", "EUR"));
        assert_eq!(summary.currency, "EUR");
        // 1000.00 USD * 0.9250
        assert_eq!(summary.total_income.cents(), 92500);
        // Savings rate is a ratio; unchanged by conversion
        assert!((summary.savings_rate - 85.0).abs() < 1e-9);
    }

    #[test]
    fn test_unknown_currency_is_rejected() {
        let err = MonthlyReport::build(
            &sample_ledger(),
            "2024-03".parse().unwrap(),
            &RateTable::default(),
            "XYZ",
        )
        .unwrap_err();
        assert!(matches!(err, LedgerError::UnknownCurrency(_)));
    }
}
