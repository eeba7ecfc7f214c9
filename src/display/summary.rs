//! Estimate display formatting
//!
//! Formats the ledgers and totals of an estimate for terminal output.

use crate::display::money::{format_percent, MoneyFormat};
use crate::models::{CostSummary, Expense, Feature};
use crate::services::EstimateSession;

/// Format the expense ledger as a table
pub fn format_expense_list(expenses: &[Expense], money: &MoneyFormat) -> String {
    if expenses.is_empty() {
        return "No expenses added yet.\n".to_string();
    }

    let name_width = expenses
        .iter()
        .map(|e| e.name.chars().count())
        .max()
        .unwrap_or(4)
        .max(4);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<12}  {:<name_width$}  {:>14}\n",
        "ID",
        "Name",
        "Monthly",
        name_width = name_width,
    ));
    output.push_str(&format!(
        "{:-<12}  {:-<name_width$}  {:->14}\n",
        "",
        "",
        "",
        name_width = name_width,
    ));

    for expense in expenses {
        output.push_str(&format!(
            "{:<12}  {:<name_width$}  {:>14}\n",
            expense.id.to_string(),
            expense.name,
            money.format(expense.amount),
            name_width = name_width,
        ));
    }

    output
}

/// Format the feature ledger as a table
pub fn format_feature_list(features: &[Feature], money: &MoneyFormat) -> String {
    if features.is_empty() {
        return "No features added yet.\n".to_string();
    }

    let name_width = features
        .iter()
        .map(|f| f.name.chars().count())
        .max()
        .unwrap_or(4)
        .max(4);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<13}  {:<name_width$}  {:<10}  {:>8}  {:>14}  {:>14}\n",
        "ID",
        "Name",
        "Complexity",
        "Hours",
        "Rate",
        "Cost",
        name_width = name_width,
    ));
    output.push_str(&format!(
        "{:-<13}  {:-<name_width$}  {:-<10}  {:->8}  {:->14}  {:->14}\n",
        "",
        "",
        "",
        "",
        "",
        "",
        name_width = name_width,
    ));

    for feature in features {
        output.push_str(&format!(
            "{:<13}  {:<name_width$}  {:<10}  {:>8}  {:>14}  {:>14}\n",
            feature.id.to_string(),
            feature.name,
            feature.complexity.label(),
            feature.hours,
            money.format_rate(feature.hourly_rate, "h"),
            money.format(feature.cost()),
            name_width = name_width,
        ));
    }

    output
}

/// Format the totals block
pub fn format_totals(summary: &CostSummary, money: &MoneyFormat) -> String {
    let mut rows: Vec<(String, String)> = vec![
        ("Expenses".into(), money.format(summary.total_expenses)),
        ("Features".into(), money.format(summary.total_feature_cost)),
        ("Subtotal".into(), money.format(summary.subtotal)),
    ];

    if summary.auto_entrepreneur {
        rows.push((
            format!(
                "Impôt forfaitaire unique ({}%)",
                format_percent(summary.effective_tax_rate)
            ),
            money.format(summary.tax_amount),
        ));
        rows.push(("CASNOS (per year)".into(), money.format(summary.surcharge)));
    } else {
        rows.push((
            format!("Tax ({}%)", format_percent(summary.effective_tax_rate)),
            money.format(summary.tax_amount),
        ));
    }

    let label_width = rows
        .iter()
        .map(|(label, _)| label.chars().count())
        .max()
        .unwrap_or(5)
        .max(5);
    let value_width = rows
        .iter()
        .map(|(_, value)| value.len())
        .chain(std::iter::once(money.format(summary.total_cost).len()))
        .max()
        .unwrap_or(0);

    let mut output = String::new();
    for (label, value) in &rows {
        output.push_str(&format!(
            "{:<label_width$}  {:>value_width$}\n",
            label,
            value,
            label_width = label_width,
            value_width = value_width,
        ));
    }
    output.push_str(&format!(
        "{:-<label_width$}  {:->value_width$}\n",
        "",
        "",
        label_width = label_width,
        value_width = value_width,
    ));
    output.push_str(&format!(
        "{:<label_width$}  {:>value_width$}\n",
        "TOTAL",
        money.format(summary.total_cost),
        label_width = label_width,
        value_width = value_width,
    ));

    output
}

/// Format a whole estimate: expenses, features and totals
pub fn format_estimate(session: &EstimateSession, money: &MoneyFormat) -> String {
    let mut output = String::new();

    output.push_str("Expenses\n");
    output.push_str(&format_expense_list(session.expenses.list(), money));
    output.push('\n');

    output.push_str("Features\n");
    output.push_str(&format_feature_list(session.features.list(), money));
    output.push('\n');

    output.push_str(&format_totals(&session.summary(), money));
    output
}
