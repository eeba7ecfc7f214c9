//! Invoice rendering
//!
//! Lays out an estimate through a [`DocumentBuilder`]:
//!
//! 1. Title
//! 2. Date and client name
//! 3. Expenses, in ledger order
//! 4. Features, in ledger order
//! 5. Subtotal, tax lines for the regime, total
//!
//! and finally saves it. The render date is the only input that is not part
//! of the estimate itself.

use chrono::{Local, NaiveDate};
use std::fmt::Write as _;
use tracing::info;

use crate::config::Settings;
use crate::display::money::{format_percent, MoneyFormat};
use crate::error::{EstimatorError, EstimatorResult};
use crate::models::{CostSummary, Expense, Feature, AUTO_ENTREPRENEUR_RATE};

use super::builder::DocumentBuilder;

/// Default file name of a saved estimate
pub const DEFAULT_INVOICE_FILENAME: &str = "project-cost-estimate.pdf";

/// Title heading of every estimate
pub const INVOICE_TITLE: &str = "Project Cost Estimate";

/// Renders estimates into documents
#[derive(Debug, Clone)]
pub struct InvoiceRenderer {
    /// Amount format used for every money value
    pub money: MoneyFormat,
    /// strftime format of the date line
    pub date_format: String,
    /// File name passed to `save`
    pub filename: String,
}

impl Default for InvoiceRenderer {
    fn default() -> Self {
        Self {
            money: MoneyFormat::dinar(),
            date_format: "%Y-%m-%d".to_string(),
            filename: DEFAULT_INVOICE_FILENAME.to_string(),
        }
    }
}

impl InvoiceRenderer {
    /// Build a renderer from user settings
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            money: settings.money_format(),
            date_format: settings.date_format.clone(),
            filename: settings.invoice_filename.clone(),
        }
    }

    /// Use a caller-supplied file name
    pub fn with_filename(mut self, filename: impl Into<String>) -> Self {
        self.filename = filename.into();
        self
    }

    /// Render an estimate dated today
    pub fn render<B: DocumentBuilder + ?Sized>(
        &self,
        client_name: &str,
        expenses: &[Expense],
        features: &[Feature],
        summary: &CostSummary,
        doc: &mut B,
    ) -> EstimatorResult<()> {
        let today = Local::now().date_naive();
        self.render_on(today, client_name, expenses, features, summary, doc)
    }

    /// Render an estimate with an explicit date
    ///
    /// A blank client name is rejected before anything reaches the builder.
    pub fn render_on<B: DocumentBuilder + ?Sized>(
        &self,
        date: NaiveDate,
        client_name: &str,
        expenses: &[Expense],
        features: &[Feature],
        summary: &CostSummary,
        doc: &mut B,
    ) -> EstimatorResult<()> {
        let client_name = client_name.trim();
        if client_name.is_empty() {
            return Err(EstimatorError::precondition(
                "A client name is required to generate an invoice",
            ));
        }
        let date = self.format_date(date)?;

        doc.heading(INVOICE_TITLE);
        doc.line(&format!("Date: {}", date));
        doc.line(&format!("Name: {}", client_name));

        doc.heading("Expenses");
        for expense in expenses {
            doc.line(&self.expense_line(expense));
        }

        doc.heading("Features");
        for feature in features {
            doc.line(&self.feature_line(feature));
        }

        for line in self.summary_lines(summary) {
            doc.line(&line);
        }

        doc.save(&self.filename)?;
        info!(
            filename = %self.filename,
            expenses = expenses.len(),
            features = features.len(),
            total = summary.total_cost,
            "invoice saved"
        );
        Ok(())
    }

    /// `"{name}: {amount}"`
    pub fn expense_line(&self, expense: &Expense) -> String {
        format!("{}: {}", expense.name, self.money.format(expense.amount))
    }

    /// `"{name} ({label}): {hours} hrs × {rate}/hr = {cost}"`
    pub fn feature_line(&self, feature: &Feature) -> String {
        format!(
            "{} ({}): {} hrs × {} = {}",
            feature.name,
            feature.complexity.label(),
            feature.hours,
            self.money.format_rate(feature.hourly_rate, "hr"),
            self.money.format(feature.cost())
        )
    }

    /// Subtotal, the regime's tax lines, and the total
    pub fn summary_lines(&self, summary: &CostSummary) -> Vec<String> {
        let mut lines = vec![format!("Subtotal: {}", self.money.format(summary.subtotal))];

        if summary.auto_entrepreneur {
            lines.push(format!(
                "Impôt forfaitaire unique ({}%): {}",
                format_percent(AUTO_ENTREPRENEUR_RATE),
                self.money.format(summary.tax_amount)
            ));
            lines.push(format!("CASNOS: {}", self.money.format(summary.surcharge)));
        } else {
            lines.push(format!(
                "Tax ({}%): {}",
                format_percent(summary.effective_tax_rate),
                self.money.format(summary.tax_amount)
            ));
        }

        lines.push(format!("Total: {}", self.money.format(summary.total_cost)));
        lines
    }

    fn format_date(&self, date: NaiveDate) -> EstimatorResult<String> {
        let mut out = String::new();
        write!(out, "{}", date.format(&self.date_format)).map_err(|_| {
            EstimatorError::Config(format!("Invalid date format: '{}'", self.date_format))
        })?;
        Ok(out)
    }
}
