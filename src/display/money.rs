//! Amount formatting
//!
//! Amounts are stored unrounded; this is the only place they get rounded.
//! The currency unit and its placement are supplied by the caller.

use serde::{Deserialize, Serialize};

/// Where the currency unit goes relative to the number
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum UnitPosition {
    /// `$50.00`
    Prefix,
    /// `50 DA`
    #[default]
    Suffix,
}

/// Fixed-decimal amount format with a currency unit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoneyFormat {
    /// Digits after the decimal point
    pub decimals: usize,
    /// Currency unit (e.g., "DA", "$")
    pub unit: String,
    /// Placement of the unit
    #[serde(default)]
    pub position: UnitPosition,
}

impl Default for MoneyFormat {
    fn default() -> Self {
        Self::dinar()
    }
}

impl MoneyFormat {
    /// Algerian dinar: whole units, `1200 DA`
    pub fn dinar() -> Self {
        Self {
            decimals: 0,
            unit: "DA".to_string(),
            position: UnitPosition::Suffix,
        }
    }

    /// US dollar: two decimals, `$1200.00`
    pub fn dollar() -> Self {
        Self {
            decimals: 2,
            unit: "$".to_string(),
            position: UnitPosition::Prefix,
        }
    }

    /// Format the bare number with this format's decimals
    pub fn number(&self, value: f64) -> String {
        format_fixed(value, self.decimals)
    }

    /// Format an amount with its unit
    pub fn format(&self, value: f64) -> String {
        let number = self.number(value);
        match self.position {
            UnitPosition::Prefix => format!("{}{}", self.unit, number),
            UnitPosition::Suffix => format!("{} {}", number, self.unit),
        }
    }

    /// Format a rate (e.g., `50 DA/hr`, `$50.00/hr`)
    pub fn format_rate(&self, value: f64, per: &str) -> String {
        format!("{}/{}", self.format(value), per)
    }
}

/// Round half away from zero to `decimals` places and print
///
/// Never prints a negative zero.
pub fn format_fixed(value: f64, decimals: usize) -> String {
    let factor = 10f64.powi(decimals as i32);
    let mut rounded = (value * factor).round() / factor;
    if rounded == 0.0 {
        rounded = 0.0;
    }
    format!("{:.*}", decimals, rounded)
}

/// Print a fraction as a percentage without trailing zeros (`0.125` -> `12.5`)
pub fn format_percent(rate: f64) -> String {
    let fixed = format_fixed(rate * 100.0, 2);
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    trimmed.to_string()
}
