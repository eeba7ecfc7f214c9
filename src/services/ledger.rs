//! Expense and feature ledgers
//!
//! An insertion-ordered collection of validated entries keyed by a unique id.
//! Removal of an unknown id is a no-op.

use tracing::debug;

use crate::error::{EstimatorError, EstimatorResult};
use crate::models::{Expense, ExpenseId, Feature, FeatureId};

/// An entry that can be stored in a [`Ledger`]
pub trait LedgerEntry {
    /// Identifier type of the entry
    type Id: Copy + Eq + std::fmt::Display;

    /// Entity name used in error messages
    const ENTITY: &'static str;

    /// The entry's id
    fn id(&self) -> Self::Id;

    /// Check the entry's fields before it enters the ledger
    fn check(&self) -> EstimatorResult<()>;
}

impl LedgerEntry for Expense {
    type Id = ExpenseId;
    const ENTITY: &'static str = "Expense";

    fn id(&self) -> ExpenseId {
        self.id
    }

    fn check(&self) -> EstimatorResult<()> {
        self.validate()
            .map_err(|e| EstimatorError::Validation(e.to_string()))
    }
}

impl LedgerEntry for Feature {
    type Id = FeatureId;
    const ENTITY: &'static str = "Feature";

    fn id(&self) -> FeatureId {
        self.id
    }

    fn check(&self) -> EstimatorResult<()> {
        self.validate()
            .map_err(|e| EstimatorError::Validation(e.to_string()))
    }
}

/// Ordered collection of ledger entries
#[derive(Debug, Clone)]
pub struct Ledger<T> {
    entries: Vec<T>,
}

/// Ledger of monthly expenses
pub type ExpenseLedger = Ledger<Expense>;

/// Ledger of feature line items
pub type FeatureLedger = Ledger<Feature>;

impl<T> Default for Ledger<T> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<T: LedgerEntry> Ledger<T> {
    /// Create an empty ledger
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry
    ///
    /// The entry is validated first; nothing is stored when validation fails.
    pub fn add(&mut self, entry: T) -> EstimatorResult<T::Id> {
        entry.check()?;

        let id = entry.id();
        if self.contains(id) {
            return Err(EstimatorError::Duplicate {
                entity_type: T::ENTITY,
                identifier: id.to_string(),
            });
        }

        self.entries.push(entry);
        debug!(entity = T::ENTITY, %id, count = self.entries.len(), "ledger entry added");
        Ok(id)
    }

    /// Remove the entry with the given id, if present
    pub fn remove(&mut self, id: T::Id) -> Option<T> {
        let index = self.entries.iter().position(|e| e.id() == id)?;
        let removed = self.entries.remove(index);
        debug!(entity = T::ENTITY, %id, count = self.entries.len(), "ledger entry removed");
        Some(removed)
    }

    /// Current entries in insertion order
    pub fn list(&self) -> &[T] {
        &self.entries
    }

    /// Look up an entry by id
    pub fn get(&self, id: T::Id) -> Option<&T> {
        self.entries.iter().find(|e| e.id() == id)
    }

    /// Check whether an id is present
    pub fn contains(&self, id: T::Id) -> bool {
        self.get(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Remove every entry
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
