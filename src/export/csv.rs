//! CSV Export functionality
//!
//! One row per line item, followed by the summary rows, for spreadsheets.

use std::io::Write;

use crate::display::money::{format_fixed, format_percent};
use crate::error::{EstimatorError, EstimatorResult};
use crate::services::EstimateSession;

const HEADER: [&str; 7] = ["Kind", "ID", "Name", "Complexity", "Hours", "Rate", "Amount"];

/// Export an estimate to CSV
pub fn export_csv<W: Write>(session: &EstimateSession, writer: W) -> EstimatorResult<()> {
    let mut csv = ::csv::Writer::from_writer(writer);
    let to_export_error = |e: ::csv::Error| EstimatorError::Export(e.to_string());

    csv.write_record(HEADER).map_err(to_export_error)?;

    for expense in session.expenses.list() {
        csv.write_record([
            "expense",
            expense.id.to_string().as_str(),
            expense.name.as_str(),
            "",
            "",
            "",
            format_fixed(expense.amount, 2).as_str(),
        ])
        .map_err(to_export_error)?;
    }

    for feature in session.features.list() {
        csv.write_record([
            "feature",
            feature.id.to_string().as_str(),
            feature.name.as_str(),
            feature.complexity.label(),
            feature.hours.to_string().as_str(),
            format_fixed(feature.hourly_rate, 2).as_str(),
            format_fixed(feature.cost(), 2).as_str(),
        ])
        .map_err(to_export_error)?;
    }

    let summary = session.summary();
    let mut totals = vec![("subtotal", "Subtotal".to_string(), summary.subtotal)];
    if summary.auto_entrepreneur {
        totals.push((
            "tax",
            format!(
                "Impôt forfaitaire unique ({}%)",
                format_percent(summary.effective_tax_rate)
            ),
            summary.tax_amount,
        ));
        totals.push(("surcharge", "CASNOS".to_string(), summary.surcharge));
    } else {
        totals.push((
            "tax",
            format!("Tax ({}%)", format_percent(summary.effective_tax_rate)),
            summary.tax_amount,
        ));
    }
    totals.push(("total", "Total".to_string(), summary.total_cost));

    for (kind, label, amount) in totals {
        csv.write_record([
            kind,
            "",
            label.as_str(),
            "",
            "",
            "",
            format_fixed(amount, 2).as_str(),
        ])
        .map_err(to_export_error)?;
    }

    csv.flush().map_err(|e| EstimatorError::Export(e.to_string()))?;
    Ok(())
}
