//! JSON Export functionality
//!
//! Exports an estimate (both ledgers, tax settings and the computed summary)
//! to JSON with schema versioning.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::error::{EstimatorError, EstimatorResult};
use crate::models::{CostSummary, Expense, Feature, TaxConfiguration};
use crate::services::{compute_summary, EstimateSession};

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Snapshot of an estimate
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EstimateExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    /// Export timestamp
    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    /// Expenses in ledger order
    pub expenses: Vec<Expense>,

    /// Features in ledger order
    pub features: Vec<Feature>,

    /// Tax settings
    pub tax: TaxConfiguration,

    /// Summary computed at export time
    pub summary: CostSummary,
}

impl EstimateExport {
    /// Snapshot a session
    pub fn from_session(session: &EstimateSession) -> Self {
        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            expenses: session.expenses.list().to_vec(),
            features: session.features.list().to_vec(),
            tax: session.tax,
            summary: session.summary(),
        }
    }

    /// Check the schema version and that the summary matches the contents
    pub fn validate(&self) -> Result<(), String> {
        if self.schema_version != EXPORT_SCHEMA_VERSION {
            return Err(format!(
                "Schema version mismatch: expected {}, got {}",
                EXPORT_SCHEMA_VERSION, self.schema_version
            ));
        }

        let recomputed = compute_summary(&self.expenses, &self.features, &self.tax);
        if recomputed != self.summary {
            return Err("Summary does not match the exported line items".to_string());
        }

        Ok(())
    }
}

/// Export an estimate to JSON
pub fn export_json<W: Write>(
    session: &EstimateSession,
    writer: &mut W,
    pretty: bool,
) -> EstimatorResult<()> {
    let export = EstimateExport::from_session(session);

    if pretty {
        serde_json::to_writer_pretty(writer, &export)
    } else {
        serde_json::to_writer(writer, &export)
    }
    .map_err(|e| EstimatorError::Export(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Complexity;

    fn sample_session() -> EstimateSession {
        let mut session = EstimateSession::new();
        session.add_expense("Server", 1000.0).unwrap();
        session
            .add_feature("Auth", Complexity::Medium, 10.0, 50.0)
            .unwrap();
        session
    }

    #[test]
    fn test_snapshot() {
        let export = EstimateExport::from_session(&sample_session());

        assert_eq!(export.schema_version, EXPORT_SCHEMA_VERSION);
        assert_eq!(export.expenses.len(), 1);
        assert_eq!(export.features.len(), 1);
        assert_eq!(export.summary.total_cost, 1800.0);
        assert!(export.validate().is_ok());
    }

    #[test]
    fn test_validate_detects_stale_summary() {
        let mut export = EstimateExport::from_session(&sample_session());
        export.expenses.clear();
        assert!(export.validate().is_err());
    }

    #[test]
    fn test_json_output() {
        let mut output = Vec::new();
        export_json(&sample_session(), &mut output, true).unwrap();

        let json = String::from_utf8(output).unwrap();
        let parsed: EstimateExport = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.expenses[0].name, "Server");
        assert_eq!(parsed.features[0].complexity, Complexity::Medium);
        assert!(json.contains("\"total_cost\": 1800.0"));
    }
}
