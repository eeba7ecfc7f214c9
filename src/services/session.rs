//! Estimate session
//!
//! Owns the two ledgers and the tax configuration for one estimate. The
//! caller holds the session and passes it by reference; nothing is global.

use tracing::debug;

use crate::error::EstimatorResult;
use crate::invoice::{DocumentBuilder, InvoiceRenderer};
use crate::models::{
    Complexity, CostSummary, Expense, ExpenseId, Feature, FeatureId, TaxConfiguration,
};

use super::aggregator::compute_summary;
use super::ledger::{ExpenseLedger, FeatureLedger};

/// One in-progress estimate
#[derive(Debug, Clone, Default)]
pub struct EstimateSession {
    pub expenses: ExpenseLedger,
    pub features: FeatureLedger,
    pub tax: TaxConfiguration,
}

impl EstimateSession {
    /// Create an empty session with the default tax settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty session with the given tax settings
    pub fn with_tax(tax: TaxConfiguration) -> Self {
        Self {
            tax,
            ..Self::default()
        }
    }

    /// Add a monthly expense
    pub fn add_expense(&mut self, name: &str, amount: f64) -> EstimatorResult<ExpenseId> {
        self.expenses.add(Expense::new(name.trim(), amount))
    }

    /// Add a feature line item
    pub fn add_feature(
        &mut self,
        name: &str,
        complexity: Complexity,
        hours: f64,
        hourly_rate: f64,
    ) -> EstimatorResult<FeatureId> {
        self.features
            .add(Feature::new(name.trim(), complexity, hours, hourly_rate))
    }

    /// Remove an expense; unknown ids are ignored
    pub fn remove_expense(&mut self, id: ExpenseId) -> Option<Expense> {
        self.expenses.remove(id)
    }

    /// Remove a feature; unknown ids are ignored
    pub fn remove_feature(&mut self, id: FeatureId) -> Option<Feature> {
        self.features.remove(id)
    }

    /// Fresh summary of the current state
    pub fn summary(&self) -> CostSummary {
        compute_summary(self.expenses.list(), self.features.list(), &self.tax)
    }

    /// Check whether at least one expense or feature has been entered
    pub fn has_items(&self) -> bool {
        !self.expenses.is_empty() || !self.features.is_empty()
    }

    /// Start a new estimate: clears both ledgers, keeps the tax settings
    pub fn reset(&mut self) {
        self.expenses.clear();
        self.features.clear();
        debug!("estimate session reset");
    }

    /// Render the current estimate with a fresh summary
    pub fn render_invoice<B: DocumentBuilder + ?Sized>(
        &self,
        client_name: &str,
        renderer: &InvoiceRenderer,
        doc: &mut B,
    ) -> EstimatorResult<()> {
        renderer.render(
            client_name,
            self.expenses.list(),
            self.features.list(),
            &self.summary(),
            doc,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::invoice::RecordedDocument;

    #[test]
    fn test_summary_tracks_mutations() {
        let mut session = EstimateSession::new();
        assert_eq!(session.summary().total_cost, 0.0);

        let server = session.add_expense("Server", 1000.0).unwrap();
        assert_eq!(session.summary().total_cost, 1200.0);

        session
            .add_feature("Auth", Complexity::Medium, 10.0, 50.0)
            .unwrap();
        assert_eq!(session.summary().subtotal, 1500.0);

        session.tax.set_auto_entrepreneur(true);
        assert_eq!(session.summary().total_cost, 25507.5);

        session.remove_expense(server);
        assert_eq!(session.summary().subtotal, 500.0);
    }

    #[test]
    fn test_add_trims_names() {
        let mut session = EstimateSession::new();
        let id = session.add_expense("  Domain  ", 15.0).unwrap();
        assert_eq!(session.expenses.get(id).unwrap().name, "Domain");
    }

    #[test]
    fn test_invalid_input_not_applied() {
        let mut session = EstimateSession::new();
        assert!(session.add_expense("", 10.0).is_err());
        assert!(session
            .add_feature("Auth", Complexity::Low, 10.0, 0.0)
            .is_err());
        assert!(!session.has_items());
    }

    #[test]
    fn test_reset_keeps_tax() {
        let mut session = EstimateSession::new();
        session.tax.set_standard_rate(0.1).unwrap();
        session.add_expense("Server", 10.0).unwrap();

        session.reset();
        assert!(!session.has_items());
        assert_eq!(session.tax.standard_rate(), 0.1);
    }

    #[test]
    fn test_render_invoice() {
        let mut session = EstimateSession::new();
        session.add_expense("Server", 1000.0).unwrap();

        let mut doc = RecordedDocument::new();
        session
            .render_invoice("Amina", &InvoiceRenderer::default(), &mut doc)
            .unwrap();

        let lines = doc.lines();
        assert!(lines.contains(&"Server: 1000 DA"));
        assert_eq!(lines.last(), Some(&"Total: 1200 DA"));
    }

    #[test]
    fn test_render_invoice_requires_client() {
        let session = EstimateSession::new();
        let mut doc = RecordedDocument::new();
        let err = session
            .render_invoice(" ", &InvoiceRenderer::default(), &mut doc)
            .unwrap_err();
        assert!(err.is_precondition());
        assert_eq!(doc.saved_as(), None);
    }
}
