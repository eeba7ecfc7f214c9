//! Cost summary
//!
//! Derived totals for an estimate. Never stored: recompute it from the
//! ledgers and the tax configuration whenever a fresh view is needed.

use serde::{Deserialize, Serialize};

/// Financial summary of an estimate
///
/// All values are unrounded; rounding happens at display time only.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CostSummary {
    /// Sum of all expense amounts
    pub total_expenses: f64,

    /// Sum of hours × hourly rate over all features
    pub total_feature_cost: f64,

    /// Expenses plus feature costs
    pub subtotal: f64,

    /// Rate applied to the subtotal
    pub effective_tax_rate: f64,

    /// Subtotal × effective rate
    pub tax_amount: f64,

    /// Flat CASNOS contribution (zero under the standard regime)
    pub surcharge: f64,

    /// Subtotal + tax + surcharge
    pub total_cost: f64,

    /// Regime the summary was computed under
    pub auto_entrepreneur: bool,
}

impl CostSummary {
    /// Check whether nothing has been billed yet
    pub fn is_empty(&self) -> bool {
        self.subtotal == 0.0
    }
}
