//! Service layer for the cost estimator
//!
//! Ledgers with validation, the cost aggregator, and the session that ties
//! them together.

pub mod aggregator;
pub mod ledger;
pub mod session;

pub use aggregator::compute_summary;
pub use ledger::{ExpenseLedger, FeatureLedger, Ledger, LedgerEntry};
pub use session::EstimateSession;
