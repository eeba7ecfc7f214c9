//! Feature model
//!
//! A billable line item: hours of work at an hourly rate, tagged with a
//! complexity level.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::FeatureId;

/// Complexity tag for a feature
///
/// Informational only: it never enters the cost formula.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Complexity {
    Low,
    #[default]
    Medium,
    High,
}

impl Complexity {
    /// Label printed on estimates
    pub fn label(&self) -> &'static str {
        match self {
            Self::Low => "Basique",
            Self::Medium => "Moyenne",
            Self::High => "Complexe",
        }
    }

    /// Parse complexity from its key or its label
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "low" | "basique" => Some(Self::Low),
            "medium" | "moyenne" => Some(Self::Medium),
            "high" | "complexe" => Some(Self::High),
            _ => None,
        }
    }
}

impl fmt::Display for Complexity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A billable feature line item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feature {
    /// Unique identifier, minted at creation
    pub id: FeatureId,

    /// Feature name (e.g., "Auth")
    pub name: String,

    /// Complexity tag
    pub complexity: Complexity,

    /// Estimated hours of work
    pub hours: f64,

    /// Hourly rate
    pub hourly_rate: f64,
}

impl Feature {
    /// Create a new feature with a fresh id
    pub fn new(
        name: impl Into<String>,
        complexity: Complexity,
        hours: f64,
        hourly_rate: f64,
    ) -> Self {
        Self {
            id: FeatureId::new(),
            name: name.into(),
            complexity,
            hours,
            hourly_rate,
        }
    }

    /// Cost of this line item (hours × hourly rate)
    pub fn cost(&self) -> f64 {
        self.hours * self.hourly_rate
    }

    /// Validate the feature
    pub fn validate(&self) -> Result<(), FeatureValidationError> {
        if self.name.trim().is_empty() {
            return Err(FeatureValidationError::EmptyName);
        }

        if !self.hours.is_finite() || self.hours <= 0.0 {
            return Err(FeatureValidationError::NonPositiveHours(self.hours));
        }

        if !self.hourly_rate.is_finite() || self.hourly_rate <= 0.0 {
            return Err(FeatureValidationError::NonPositiveRate(self.hourly_rate));
        }

        Ok(())
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.complexity)
    }
}

/// Validation errors for features
#[derive(Debug, Clone, PartialEq)]
pub enum FeatureValidationError {
    EmptyName,
    NonPositiveHours(f64),
    NonPositiveRate(f64),
}

impl fmt::Display for FeatureValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Feature name cannot be empty"),
            Self::NonPositiveHours(hours) => {
                write!(f, "Feature hours must be a positive number (got {})", hours)
            }
            Self::NonPositiveRate(rate) => {
                write!(f, "Hourly rate must be a positive number (got {})", rate)
            }
        }
    }
}

impl std::error::Error for FeatureValidationError {}
