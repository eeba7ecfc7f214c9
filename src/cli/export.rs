//! CLI command for estimate export
//!
//! Writes a snapshot of the estimate in the chosen format.

use clap::{Args, ValueEnum};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use crate::config::Settings;
use crate::error::{EstimatorError, EstimatorResult};
use crate::export::{export_csv, export_json, export_yaml};

use super::estimate::EstimateArgs;

/// Export format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// CSV line items and totals
    Csv,
    /// JSON snapshot
    Json,
    /// YAML snapshot, human-readable
    Yaml,
}

/// Arguments of `estimate export`
#[derive(Args, Debug)]
pub struct ExportArgs {
    #[command(flatten)]
    pub estimate: EstimateArgs,

    /// Output file path
    pub output: PathBuf,

    /// Export format
    #[arg(long, value_enum, default_value = "json")]
    pub format: ExportFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,
}

/// Handle the export command
pub fn handle_export_command(settings: &Settings, args: ExportArgs) -> EstimatorResult<()> {
    let session = args.estimate.build_session(settings)?;

    let file = File::create(&args.output).map_err(|e| {
        EstimatorError::Export(format!(
            "Failed to create file {}: {}",
            args.output.display(),
            e
        ))
    })?;
    let mut writer = BufWriter::new(file);

    match args.format {
        ExportFormat::Csv => export_csv(&session, &mut writer)?,
        ExportFormat::Json => export_json(&session, &mut writer, args.pretty)?,
        ExportFormat::Yaml => export_yaml(&session, &mut writer)?,
    }
    writer
        .flush()
        .map_err(|e| EstimatorError::Export(e.to_string()))?;

    println!(
        "Exported {} expenses and {} features to: {}",
        session.expenses.len(),
        session.features.len(),
        args.output.display()
    );

    Ok(())
}
