//! Expense model
//!
//! A flat monthly cost (hosting, licences, tooling) charged to the project.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::ExpenseId;

/// A named monthly expense
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// Unique identifier, minted at creation
    pub id: ExpenseId,

    /// Expense name (e.g., "Server")
    pub name: String,

    /// Monthly flat cost
    pub amount: f64,
}

impl Expense {
    /// Create a new expense with a fresh id
    pub fn new(name: impl Into<String>, amount: f64) -> Self {
        Self {
            id: ExpenseId::new(),
            name: name.into(),
            amount,
        }
    }

    /// Validate the expense
    pub fn validate(&self) -> Result<(), ExpenseValidationError> {
        if self.name.trim().is_empty() {
            return Err(ExpenseValidationError::EmptyName);
        }

        if !self.amount.is_finite() || self.amount <= 0.0 {
            return Err(ExpenseValidationError::NonPositiveAmount(self.amount));
        }

        Ok(())
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Validation errors for expenses
#[derive(Debug, Clone, PartialEq)]
pub enum ExpenseValidationError {
    EmptyName,
    NonPositiveAmount(f64),
}

impl fmt::Display for ExpenseValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Expense name cannot be empty"),
            Self::NonPositiveAmount(amount) => {
                write!(f, "Expense amount must be a positive number (got {})", amount)
            }
        }
    }
}

impl std::error::Error for ExpenseValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_expense() {
        let expense = Expense::new("Server", 1000.0);
        assert_eq!(expense.name, "Server");
        assert_eq!(expense.amount, 1000.0);
        assert!(expense.validate().is_ok());
    }

    #[test]
    fn test_fresh_ids() {
        let a = Expense::new("Server", 1000.0);
        let b = Expense::new("Server", 1000.0);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_validation() {
        assert_eq!(
            Expense::new("   ", 10.0).validate(),
            Err(ExpenseValidationError::EmptyName)
        );
        assert!(matches!(
            Expense::new("Server", 0.0).validate(),
            Err(ExpenseValidationError::NonPositiveAmount(_))
        ));
        assert!(Expense::new("Server", -5.0).validate().is_err());
        assert!(Expense::new("Server", f64::NAN).validate().is_err());
        assert!(Expense::new("Server", f64::INFINITY).validate().is_err());
    }
}
