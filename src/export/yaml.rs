//! YAML Export functionality
//!
//! Same snapshot as the JSON export, in a human-readable layout.

use std::io::Write;

use crate::error::{EstimatorError, EstimatorResult};
use crate::export::json::EstimateExport;
use crate::services::EstimateSession;

/// Export an estimate to YAML
pub fn export_yaml<W: Write>(session: &EstimateSession, writer: &mut W) -> EstimatorResult<()> {
    let export = EstimateExport::from_session(session);

    writeln!(writer, "# Project Cost Estimate")
        .map_err(|e| EstimatorError::Export(e.to_string()))?;
    writeln!(writer, "# Generated: {}", export.exported_at)
        .map_err(|e| EstimatorError::Export(e.to_string()))?;
    writeln!(writer, "# App Version: {}", export.app_version)
        .map_err(|e| EstimatorError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| EstimatorError::Export(e.to_string()))?;

    serde_yaml::to_writer(writer, &export).map_err(|e| EstimatorError::Export(e.to_string()))?;

    Ok(())
}
