//! Invoice CLI command
//!
//! Renders the estimate and saves it with the chosen document backend.

use clap::{Args, ValueEnum};
use std::path::{Path, PathBuf};

use crate::config::Settings;
use crate::error::{EstimatorError, EstimatorResult};
use crate::invoice::{DocumentBuilder, HtmlDocument, InvoiceRenderer, TextDocument};

use super::estimate::EstimateArgs;

/// Document backend options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum DocumentFormat {
    /// Plain text
    #[default]
    Text,
    /// Standalone HTML page
    Html,
}

impl DocumentFormat {
    /// File extension used when no output path is given
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Text => "txt",
            Self::Html => "html",
        }
    }

    fn builder(&self) -> Box<dyn DocumentBuilder> {
        match self {
            Self::Text => Box::new(TextDocument::new()),
            Self::Html => Box::new(HtmlDocument::new()),
        }
    }
}

/// Arguments of `estimate invoice`
#[derive(Args, Debug)]
pub struct InvoiceArgs {
    #[command(flatten)]
    pub estimate: EstimateArgs,

    /// Name printed on the invoice
    #[arg(short, long)]
    pub client: String,

    /// Output file (defaults to the configured invoice file name)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Document format
    #[arg(long, value_enum, default_value = "text")]
    pub format: DocumentFormat,
}

/// Handle the invoice command
pub fn handle_invoice_command(settings: &Settings, args: InvoiceArgs) -> EstimatorResult<()> {
    let session = args.estimate.build_session(settings)?;

    if !session.has_items() {
        return Err(EstimatorError::precondition(
            "Add at least one expense or feature to generate an invoice",
        ));
    }

    let output = args.output.unwrap_or_else(|| {
        Path::new(&settings.invoice_filename).with_extension(args.format.extension())
    });
    let filename = output.to_str().ok_or_else(|| {
        EstimatorError::Validation(format!("Output path is not valid UTF-8: {}", output.display()))
    })?;

    let renderer = InvoiceRenderer::from_settings(settings).with_filename(filename);
    let mut doc = args.format.builder();
    session.render_invoice(&args.client, &renderer, &mut doc)?;

    println!("Invoice saved to: {}", output.display());
    println!(
        "Total: {}",
        renderer.money.format(session.summary().total_cost)
    );

    Ok(())
}
