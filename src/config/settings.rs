//! User settings for the cost estimator
//!
//! Presentation preferences (currency, date format, invoice file name) and
//! the default standard tax rate for new estimates.

use serde::{Deserialize, Serialize};

use super::paths::EstimatorPaths;
use crate::display::money::{MoneyFormat, UnitPosition};
use crate::error::EstimatorError;
use crate::invoice::DEFAULT_INVOICE_FILENAME;
use crate::models::{TaxConfiguration, DEFAULT_STANDARD_RATE};

/// User settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency unit printed with amounts
    #[serde(default = "default_currency")]
    pub currency_unit: String,

    /// Whether the unit goes before or after the number
    #[serde(default)]
    pub currency_position: UnitPosition,

    /// Decimal places shown for amounts
    #[serde(default)]
    pub decimals: usize,

    /// Standard tax rate for new estimates, as a fraction
    #[serde(default = "default_tax_rate")]
    pub default_tax_rate: f64,

    /// File name used when saving an invoice
    #[serde(default = "default_invoice_filename")]
    pub invoice_filename: String,

    /// Date format preference (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "DA".to_string()
}

fn default_tax_rate() -> f64 {
    DEFAULT_STANDARD_RATE
}

fn default_invoice_filename() -> String {
    DEFAULT_INVOICE_FILENAME.to_string()
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_unit: default_currency(),
            currency_position: UnitPosition::Suffix,
            decimals: 0,
            default_tax_rate: default_tax_rate(),
            invoice_filename: default_invoice_filename(),
            date_format: default_date_format(),
        }
    }
}

impl Settings {
    /// Amount format described by these settings
    pub fn money_format(&self) -> MoneyFormat {
        MoneyFormat {
            decimals: self.decimals,
            unit: self.currency_unit.clone(),
            position: self.currency_position,
        }
    }

    /// Tax configuration for a new estimate
    pub fn tax_configuration(&self) -> Result<TaxConfiguration, EstimatorError> {
        TaxConfiguration::with_standard_rate(self.default_tax_rate).map_err(|e| {
            EstimatorError::Config(format!("Invalid default_tax_rate in settings: {}", e))
        })
    }

    /// Load settings from disk, or use defaults if the file doesn't exist
    pub fn load_or_create(paths: &EstimatorPaths) -> Result<Self, EstimatorError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                EstimatorError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                EstimatorError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &EstimatorPaths) -> Result<(), EstimatorError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            EstimatorError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(paths.settings_file(), contents).map_err(|e| {
            EstimatorError::Io(format!("Failed to write settings file: {}", e))
        })?;

        Ok(())
    }
}
