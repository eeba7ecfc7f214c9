//! Display formatting for terminal output
//!
//! Provides amount formatting and table views of an estimate.

pub mod money;
pub mod summary;

pub use money::{format_fixed, format_percent, MoneyFormat, UnitPosition};
pub use summary::{format_estimate, format_expense_list, format_feature_list, format_totals};
