//! Core data models for the cost estimator
//!
//! This module contains the data structures of an estimate: expenses,
//! features, the tax configuration and the derived cost summary.

pub mod expense;
pub mod feature;
pub mod ids;
pub mod summary;
pub mod tax;

pub use expense::{Expense, ExpenseValidationError};
pub use feature::{Complexity, Feature, FeatureValidationError};
pub use ids::{ExpenseId, FeatureId};
pub use summary::CostSummary;
pub use tax::{
    TaxConfiguration, TaxRegime, AUTO_ENTREPRENEUR_RATE, CASNOS_ANNUAL_SURCHARGE,
    DEFAULT_STANDARD_RATE,
};
