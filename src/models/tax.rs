//! Tax configuration
//!
//! Two mutually exclusive regimes: a user-set standard rate, or the
//! auto-entrepreneur regime (flat 0.5% single tax plus the yearly CASNOS
//! contribution). The standard rate is kept while the auto-entrepreneur flag
//! is set, so switching back restores it.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{EstimatorError, EstimatorResult};

/// Default standard tax rate for self-employed work (20%)
pub const DEFAULT_STANDARD_RATE: f64 = 0.20;

/// Single flat tax rate under the auto-entrepreneur regime (0.5%)
pub const AUTO_ENTREPRENEUR_RATE: f64 = 0.005;

/// Yearly CASNOS contribution under the auto-entrepreneur regime, in DA
pub const CASNOS_ANNUAL_SURCHARGE: f64 = 24_000.0;

/// The regime in effect for a configuration
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TaxRegime {
    /// Percentage tax at the given fraction
    Standard { rate: f64 },
    /// Flat 0.5% plus CASNOS
    AutoEntrepreneur,
}

impl fmt::Display for TaxRegime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Standard { rate } => write!(f, "Standard ({}%)", rate * 100.0),
            Self::AutoEntrepreneur => write!(f, "Auto-entrepreneur"),
        }
    }
}

/// User tax settings
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TaxConfiguration {
    standard_rate: f64,
    #[serde(default)]
    is_auto_entrepreneur: bool,
}

impl Default for TaxConfiguration {
    fn default() -> Self {
        Self {
            standard_rate: DEFAULT_STANDARD_RATE,
            is_auto_entrepreneur: false,
        }
    }
}

impl TaxConfiguration {
    /// Create a standard-regime configuration with a validated rate
    pub fn with_standard_rate(rate: f64) -> EstimatorResult<Self> {
        let mut config = Self::default();
        config.set_standard_rate(rate)?;
        Ok(config)
    }

    /// The stored standard rate (ignored while auto-entrepreneur is on)
    pub fn standard_rate(&self) -> f64 {
        self.standard_rate
    }

    /// Whether the auto-entrepreneur regime is active
    pub fn is_auto_entrepreneur(&self) -> bool {
        self.is_auto_entrepreneur
    }

    /// Set the standard rate as a fraction in `[0, 1]`
    ///
    /// Out-of-range input is rejected and the stored rate is left unchanged.
    pub fn set_standard_rate(&mut self, rate: f64) -> EstimatorResult<()> {
        if !rate.is_finite() || !(0.0..=1.0).contains(&rate) {
            return Err(EstimatorError::Validation(format!(
                "Tax rate must be between 0% and 100% (got {}%)",
                rate * 100.0
            )));
        }
        self.standard_rate = rate;
        Ok(())
    }

    /// Set the standard rate from a percentage (e.g., `20.0` for 20%)
    pub fn set_standard_rate_percent(&mut self, percent: f64) -> EstimatorResult<()> {
        self.set_standard_rate(percent / 100.0)
    }

    /// Toggle the auto-entrepreneur regime
    pub fn set_auto_entrepreneur(&mut self, enabled: bool) {
        self.is_auto_entrepreneur = enabled;
    }

    /// The regime currently in effect
    pub fn regime(&self) -> TaxRegime {
        if self.is_auto_entrepreneur {
            TaxRegime::AutoEntrepreneur
        } else {
            TaxRegime::Standard {
                rate: self.standard_rate,
            }
        }
    }

    /// Rate applied to the subtotal
    pub fn effective_rate(&self) -> f64 {
        match self.regime() {
            TaxRegime::AutoEntrepreneur => AUTO_ENTREPRENEUR_RATE,
            TaxRegime::Standard { rate } => rate,
        }
    }

    /// Flat amount added on top of the tax
    pub fn surcharge(&self) -> f64 {
        match self.regime() {
            TaxRegime::AutoEntrepreneur => CASNOS_ANNUAL_SURCHARGE,
            TaxRegime::Standard { .. } => 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let config = TaxConfiguration::default();
        assert_eq!(config.standard_rate(), 0.20);
        assert!(!config.is_auto_entrepreneur());
        assert_eq!(config.effective_rate(), 0.20);
        assert_eq!(config.surcharge(), 0.0);
    }

    #[test]
    fn test_set_standard_rate_bounds() {
        let mut config = TaxConfiguration::default();
        config.set_standard_rate(0.0).unwrap();
        assert_eq!(config.standard_rate(), 0.0);
        config.set_standard_rate(1.0).unwrap();
        assert_eq!(config.standard_rate(), 1.0);
    }

    #[test]
    fn test_out_of_range_rate_leaves_rate_unchanged() {
        let mut config = TaxConfiguration::with_standard_rate(0.15).unwrap();

        let err = config.set_standard_rate(1.5).unwrap_err();
        assert!(err.is_validation());
        assert!(config.set_standard_rate(-0.01).is_err());
        assert!(config.set_standard_rate(f64::NAN).is_err());

        assert_eq!(config.standard_rate(), 0.15);
    }

    #[test]
    fn test_percent_input() {
        let mut config = TaxConfiguration::default();
        config.set_standard_rate_percent(12.5).unwrap();
        assert_eq!(config.standard_rate(), 0.125);
        assert!(config.set_standard_rate_percent(150.0).is_err());
    }

    #[test]
    fn test_auto_entrepreneur_overrides_standard_rate() {
        let mut config = TaxConfiguration::with_standard_rate(0.30).unwrap();
        config.set_auto_entrepreneur(true);

        assert_eq!(config.regime(), TaxRegime::AutoEntrepreneur);
        assert_eq!(config.effective_rate(), AUTO_ENTREPRENEUR_RATE);
        assert_eq!(config.surcharge(), CASNOS_ANNUAL_SURCHARGE);
        assert_eq!(config.standard_rate(), 0.30);

        config.set_auto_entrepreneur(false);
        assert_eq!(config.regime(), TaxRegime::Standard { rate: 0.30 });
        assert_eq!(config.surcharge(), 0.0);
    }

    #[test]
    fn test_rate_changes_apply_while_auto_entrepreneur() {
        let mut config = TaxConfiguration::default();
        config.set_auto_entrepreneur(true);
        config.set_standard_rate(0.5).unwrap();

        assert_eq!(config.effective_rate(), AUTO_ENTREPRENEUR_RATE);
        config.set_auto_entrepreneur(false);
        assert_eq!(config.effective_rate(), 0.5);
    }
}
