use anyhow::Result;
use clap::{Parser, Subcommand};

use cost_estimator::cli::{
    handle_export_command, handle_invoice_command, handle_summary_command, EstimateArgs,
    ExportArgs, InvoiceArgs,
};
use cost_estimator::config::{EstimatorPaths, Settings};

#[derive(Parser)]
#[command(
    name = "estimate",
    author = "Kaylee Beyene",
    version,
    about = "Project cost estimator and invoice generator",
    long_about = "Estimate the cost of a software project from monthly expenses \
                  and feature line items, apply the standard or auto-entrepreneur \
                  tax regime, and generate an invoice."
)]
struct Cli {
    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the cost summary
    Summary(EstimateArgs),

    /// Render and save an invoice
    Invoice(InvoiceArgs),

    /// Export the estimate to JSON, YAML or CSV
    Export(ExportArgs),

    /// Write the default settings file
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    cost_estimator::logging::init(cli.verbose);

    // Initialize paths and settings
    let paths = EstimatorPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    match cli.command {
        Some(Commands::Summary(args)) => {
            handle_summary_command(&settings, args)?;
        }
        Some(Commands::Invoice(args)) => {
            handle_invoice_command(&settings, args)?;
        }
        Some(Commands::Export(args)) => {
            handle_export_command(&settings, args)?;
        }
        Some(Commands::Init) => {
            settings.save(&paths)?;
            println!("Settings written to: {}", paths.settings_file().display());
        }
        Some(Commands::Config) => {
            println!("Cost Estimator Configuration");
            println!("============================");
            println!("Config directory: {}", paths.base_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!();
            println!("Settings:");
            println!("  Currency unit:     {}", settings.currency_unit);
            println!("  Currency position: {:?}", settings.currency_position);
            println!("  Decimals:          {}", settings.decimals);
            println!("  Default tax rate:  {}", settings.default_tax_rate);
            println!("  Invoice file name: {}", settings.invoice_filename);
            println!("  Date format:       {}", settings.date_format);
        }
        None => {
            println!("Cost Estimator - project cost estimation");
            println!();
            println!("Run 'estimate --help' for usage information.");
            println!("Run 'estimate summary -e Server=1000 -f Auth:medium:10:50' for a quick estimate.");
        }
    }

    Ok(())
}
