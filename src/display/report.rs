//! Monthly report display formatting
//!
//! Renders the structured monthly report as terminal text, including a
//! simple bar chart for the top expense categories.

use crate::models::category;
use crate::reports::{MonthlyReport, MonthlySummary};

const BAR_WIDTH: usize = 30;

/// Format a monthly report for terminal display
pub fn format_monthly_report(report: &MonthlyReport, symbol: &str) -> String {
    match report {
        MonthlyReport::NoData { month } => {
            format!("No transactions recorded for {}.\n", month)
        }
        MonthlyReport::Ready(summary) => format_ready(summary, symbol),
    }
}

fn format_ready(summary: &MonthlySummary, symbol: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "Monthly Report: {} ({})\n",
        summary.month.long_name(),
        summary.currency
    ));
    output.push_str(&"=".repeat(60));
    output.push('\n');

    output.push_str(&format!(
        "Transactions:      {}\n",
        summary.transaction_count
    ));
    output.push_str(&format!(
        "Total Income:      {}\n",
        summary.total_income.format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "Total Expense:     {}\n",
        summary.total_expense.format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "Balance:           {}\n",
        summary.balance.format_with_symbol(symbol)
    ));
    output.push_str(&format!("Savings Rate:      {:.1}%\n", summary.savings_rate));
    output.push_str(&format!(
        "Avg Daily Expense: {}\n",
        summary.avg_daily_expense.format_with_symbol(symbol)
    ));

    if !summary.income_by_category.is_empty() {
        output.push_str("\nIncome by category:\n");
        for entry in &summary.income_by_category {
            output.push_str(&format!(
                "  {:20} {:>12}\n",
                category::display_name(&entry.category),
                entry.total.format_with_symbol(symbol)
            ));
        }
    }

    let top = summary.top_expense_categories();
    if !top.is_empty() {
        output.push_str("\nTop expenses:\n");
        let max_cents = top[0].total.cents().max(1);
        for entry in top {
            let width = (entry.total.cents() * BAR_WIDTH as i64 / max_cents) as usize;
            output.push_str(&format!(
                "  {:20} {:>12}  {}\n",
                category::display_name(&entry.category),
                entry.total.format_with_symbol(symbol),
                "#".repeat(width.max(1))
            ));
        }
    }

    output
}
