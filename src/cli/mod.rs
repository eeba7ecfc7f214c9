//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod estimate;
pub mod export;
pub mod invoice;

pub use estimate::{parse_expense, parse_feature, EstimateArgs, ExpenseArg, FeatureArg};
pub use export::{handle_export_command, ExportArgs, ExportFormat};
pub use invoice::{handle_invoice_command, DocumentFormat, InvoiceArgs};

use crate::config::Settings;
use crate::display::format_estimate;
use crate::error::EstimatorResult;

/// Handle the summary command
pub fn handle_summary_command(settings: &Settings, args: EstimateArgs) -> EstimatorResult<()> {
    let session = args.build_session(settings)?;
    print!("{}", format_estimate(&session, &settings.money_format()));
    Ok(())
}
