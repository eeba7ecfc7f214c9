//! Estimate input arguments
//!
//! Every command builds its session from the same flags: an optional sheet
//! file plus inline expenses, features and tax settings.

use clap::Args;
use std::path::PathBuf;

use crate::config::Settings;
use crate::error::EstimatorResult;
use crate::export::EstimateSheet;
use crate::models::Complexity;
use crate::services::EstimateSession;

/// An expense given on the command line
#[derive(Debug, Clone, PartialEq)]
pub struct ExpenseArg {
    pub name: String,
    pub amount: f64,
}

/// A feature given on the command line
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureArg {
    pub name: String,
    pub complexity: Complexity,
    pub hours: f64,
    pub hourly_rate: f64,
}

/// Flags describing an estimate
#[derive(Args, Debug, Default)]
pub struct EstimateArgs {
    /// Estimate sheet to start from (.json, .yaml or .yml)
    #[arg(short, long)]
    pub sheet: Option<PathBuf>,

    /// Monthly expense, e.g. "Server=1000" (repeatable)
    #[arg(short = 'e', long = "expense", value_name = "NAME=AMOUNT", value_parser = parse_expense)]
    pub expenses: Vec<ExpenseArg>,

    /// Feature line item, e.g. "Auth:medium:10:50" (repeatable)
    #[arg(
        short = 'f',
        long = "feature",
        value_name = "NAME:COMPLEXITY:HOURS:RATE",
        value_parser = parse_feature
    )]
    pub features: Vec<FeatureArg>,

    /// Standard tax rate in percent (e.g. 20)
    #[arg(short = 't', long, value_name = "PERCENT")]
    pub tax_rate: Option<f64>,

    /// Apply the auto-entrepreneur regime (0.5% + CASNOS)
    #[arg(short = 'a', long)]
    pub auto_entrepreneur: bool,
}

impl EstimateArgs {
    /// Build the session these flags describe
    ///
    /// The sheet is applied first, then inline entries, then tax flags.
    pub fn build_session(&self, settings: &Settings) -> EstimatorResult<EstimateSession> {
        let mut session = EstimateSession::with_tax(settings.tax_configuration()?);

        if let Some(path) = &self.sheet {
            EstimateSheet::load(path)?.apply_to(&mut session)?;
        }

        for expense in &self.expenses {
            session.add_expense(&expense.name, expense.amount)?;
        }

        for feature in &self.features {
            session.add_feature(
                &feature.name,
                feature.complexity,
                feature.hours,
                feature.hourly_rate,
            )?;
        }

        if let Some(percent) = self.tax_rate {
            session.tax.set_standard_rate_percent(percent)?;
        }
        if self.auto_entrepreneur {
            session.tax.set_auto_entrepreneur(true);
        }

        Ok(session)
    }
}

/// Parse `NAME=AMOUNT`; the name may itself contain `=`
pub fn parse_expense(s: &str) -> Result<ExpenseArg, String> {
    let (name, amount) = s
        .rsplit_once('=')
        .ok_or_else(|| format!("Invalid expense '{}': expected NAME=AMOUNT", s))?;

    let amount = parse_number(amount, "amount")?;
    Ok(ExpenseArg {
        name: name.trim().to_string(),
        amount,
    })
}

/// Parse `NAME:COMPLEXITY:HOURS:RATE`; the name may itself contain `:`
pub fn parse_feature(s: &str) -> Result<FeatureArg, String> {
    let parts: Vec<&str> = s.rsplitn(4, ':').collect();
    let [rate, hours, complexity, name] = parts.as_slice() else {
        return Err(format!(
            "Invalid feature '{}': expected NAME:COMPLEXITY:HOURS:RATE",
            s
        ));
    };

    let complexity = Complexity::parse(complexity).ok_or_else(|| {
        format!(
            "Invalid complexity '{}'. Valid values: low, medium, high",
            complexity
        )
    })?;

    Ok(FeatureArg {
        name: name.trim().to_string(),
        complexity,
        hours: parse_number(hours, "hours")?,
        hourly_rate: parse_number(rate, "rate")?,
    })
}

fn parse_number(s: &str, field: &str) -> Result<f64, String> {
    s.trim()
        .parse::<f64>()
        .map_err(|_| format!("Invalid {} '{}': expected a number", field, s.trim()))
}
