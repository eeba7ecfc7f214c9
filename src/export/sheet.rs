//! Estimate sheets
//!
//! A sheet describes a whole estimate in one JSON or YAML file, so the CLI
//! can build a session in a single invocation:
//!
//! ```yaml
//! expenses:
//!   - name: Server
//!     amount: 1000
//! features:
//!   - name: Auth
//!     complexity: medium
//!     hours: 10
//!     hourly_rate: 50
//! tax:
//!   rate_percent: 20
//!   auto_entrepreneur: false
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{EstimatorError, EstimatorResult};
use crate::models::{Complexity, TaxConfiguration};
use crate::services::EstimateSession;

/// An expense entry in a sheet
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SheetExpense {
    pub name: String,
    pub amount: f64,
}

/// A feature entry in a sheet
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SheetFeature {
    pub name: String,
    #[serde(default)]
    pub complexity: Complexity,
    pub hours: f64,
    pub hourly_rate: f64,
}

/// Tax settings in a sheet
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SheetTax {
    /// Standard rate as a percentage; the settings default applies when absent
    #[serde(default)]
    pub rate_percent: Option<f64>,
    #[serde(default)]
    pub auto_entrepreneur: bool,
}

/// A whole estimate described in one file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EstimateSheet {
    #[serde(default)]
    pub expenses: Vec<SheetExpense>,
    #[serde(default)]
    pub features: Vec<SheetFeature>,
    #[serde(default)]
    pub tax: SheetTax,
}

impl EstimateSheet {
    /// Parse a JSON sheet
    pub fn from_json_str(json: &str) -> EstimatorResult<Self> {
        serde_json::from_str(json).map_err(|e| EstimatorError::Import(e.to_string()))
    }

    /// Parse a YAML sheet
    pub fn from_yaml_str(yaml: &str) -> EstimatorResult<Self> {
        serde_yaml::from_str(yaml).map_err(|e| EstimatorError::Import(e.to_string()))
    }

    /// Load a sheet, picking the parser from the file extension
    pub fn load(path: &Path) -> EstimatorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            EstimatorError::Import(format!("Failed to read {}: {}", path.display(), e))
        })?;

        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_lowercase());

        match extension.as_deref() {
            Some("json") => Self::from_json_str(&contents),
            Some("yaml") | Some("yml") => Self::from_yaml_str(&contents),
            _ => Err(EstimatorError::Import(format!(
                "Unsupported sheet format: {} (expected .json, .yaml or .yml)",
                path.display()
            ))),
        }
    }

    /// Build a session from the sheet
    ///
    /// Every entry goes through ledger validation; the first invalid entry
    /// aborts the whole import.
    pub fn into_session(self, base_tax: TaxConfiguration) -> EstimatorResult<EstimateSession> {
        let mut session = EstimateSession::with_tax(base_tax);
        self.apply_to(&mut session)?;
        Ok(session)
    }

    /// Add the sheet's entries and tax settings to an existing session
    ///
    /// The session is left untouched when any entry is invalid.
    pub fn apply_to(self, session: &mut EstimateSession) -> EstimatorResult<()> {
        let mut staged = session.clone();

        for (index, expense) in self.expenses.iter().enumerate() {
            staged
                .add_expense(&expense.name, expense.amount)
                .map_err(|e| entry_error("expense", index, &expense.name, e))?;
        }

        for (index, feature) in self.features.iter().enumerate() {
            staged
                .add_feature(
                    &feature.name,
                    feature.complexity,
                    feature.hours,
                    feature.hourly_rate,
                )
                .map_err(|e| entry_error("feature", index, &feature.name, e))?;
        }

        if let Some(percent) = self.tax.rate_percent {
            staged.tax.set_standard_rate_percent(percent)?;
        }
        if self.tax.auto_entrepreneur {
            staged.tax.set_auto_entrepreneur(true);
        }

        *session = staged;
        Ok(())
    }
}

fn entry_error(kind: &str, index: usize, name: &str, err: EstimatorError) -> EstimatorError {
    match err {
        EstimatorError::Validation(msg) => EstimatorError::Validation(format!(
            "{} #{} ('{}'): {}",
            kind,
            index + 1,
            name,
            msg
        )),
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const YAML_SHEET: &str = r#"
expenses:
  - name: Server
    amount: 1000
features:
  - name: Auth
    complexity: medium
    hours: 10
    hourly_rate: 50
tax:
  auto_entrepreneur: true
"#;

    #[test]
    fn test_yaml_sheet() {
        let sheet = EstimateSheet::from_yaml_str(YAML_SHEET).unwrap();
        let session = sheet.into_session(TaxConfiguration::default()).unwrap();

        let summary = session.summary();
        assert_eq!(summary.subtotal, 1500.0);
        assert_eq!(summary.total_cost, 25507.5);
    }

    #[test]
    fn test_json_sheet_with_rate() {
        let json = r#"{
            "expenses": [{ "name": "Server", "amount": 1000 }],
            "tax": { "rate_percent": 10 }
        }"#;
        let sheet = EstimateSheet::from_json_str(json).unwrap();
        let session = sheet.into_session(TaxConfiguration::default()).unwrap();

        assert_eq!(session.tax.standard_rate(), 0.1);
        assert_eq!(session.summary().total_cost, 1100.0);
    }

    #[test]
    fn test_missing_complexity_defaults_to_medium() {
        let json = r#"{ "features": [{ "name": "Auth", "hours": 1, "hourly_rate": 10 }] }"#;
        let session = EstimateSheet::from_json_str(json)
            .unwrap()
            .into_session(TaxConfiguration::default())
            .unwrap();
        assert_eq!(session.features.list()[0].complexity, Complexity::Medium);
    }

    #[test]
    fn test_invalid_entry_aborts_without_changes() {
        let mut session = EstimateSession::new();
        session.add_expense("Existing", 5.0).unwrap();

        let json = r#"{
            "expenses": [
                { "name": "Server", "amount": 1000 },
                { "name": "Broken", "amount": -1 }
            ]
        }"#;
        let err = EstimateSheet::from_json_str(json)
            .unwrap()
            .apply_to(&mut session)
            .unwrap_err();

        assert!(err.is_validation());
        assert!(err.to_string().contains("expense #2 ('Broken')"));
        assert_eq!(session.expenses.len(), 1);
    }

    #[test]
    fn test_out_of_range_rate_rejected() {
        let json = r#"{ "tax": { "rate_percent": 120 } }"#;
        let err = EstimateSheet::from_json_str(json)
            .unwrap()
            .into_session(TaxConfiguration::default())
            .unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_load_by_extension() {
        let temp_dir = TempDir::new().unwrap();
        let yaml_path = temp_dir.path().join("estimate.yml");
        std::fs::write(&yaml_path, YAML_SHEET).unwrap();
        assert_eq!(EstimateSheet::load(&yaml_path).unwrap().expenses.len(), 1);

        let txt_path = temp_dir.path().join("estimate.txt");
        std::fs::write(&txt_path, YAML_SHEET).unwrap();
        assert!(matches!(
            EstimateSheet::load(&txt_path),
            Err(EstimatorError::Import(_))
        ));
    }

    #[test]
    fn test_malformed_sheet() {
        assert!(matches!(
            EstimateSheet::from_json_str("{ not json"),
            Err(EstimatorError::Import(_))
        ));
    }
}
