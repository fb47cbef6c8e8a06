//! Summary display formatting

use crate::models::category;
use crate::services::Summary;

/// Format aggregated totals for terminal display
pub fn format_summary(summary: &Summary, symbol: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "Total Income:  {}\n",
        summary.total_income.format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "Total Expense: {}\n",
        summary.total_expense.format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "Balance:       {}\n",
        summary.balance.format_with_symbol(symbol)
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

    if !summary.expense_by_category.is_empty() {
        output.push_str("\nExpenses by category:\n");
        for entry in &summary.expense_by_category {
            output.push_str(&format!(
                "  {:20} {:>12}\n",
                category::display_name(&entry.category),
                entry.total.format_with_symbol(symbol)
            ));
        }
    }

    output
}
