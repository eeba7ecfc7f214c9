//! Import and export of estimates
//!
//! - Sheets: one-shot JSON/YAML description of an estimate (input)
//! - CSV: line items and totals (spreadsheet-compatible)
//! - JSON: machine-readable snapshot with the computed summary
//! - YAML: human-readable snapshot

pub mod csv;
pub mod json;
pub mod sheet;
pub mod yaml;

pub use self::csv::export_csv;
pub use json::{export_json, EstimateExport, EXPORT_SCHEMA_VERSION};
pub use sheet::{EstimateSheet, SheetExpense, SheetFeature, SheetTax};
pub use yaml::export_yaml;
