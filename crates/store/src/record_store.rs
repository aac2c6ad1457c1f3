//! In-memory record store keyed by comb id.

use std::collections::BTreeMap;

use combstock_core::{DomainError, DomainResult, Entity};
use combstock_inventory::{Comb, CombId};

/// The in-memory mapping of comb id to record.
///
/// Backed by a `BTreeMap` so listing order is stable across sessions
/// regardless of insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordStore {
    records: BTreeMap<CombId, Comb>,
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a new record. Fails with [`DomainError::Conflict`] if a
    /// record with the same id already exists.
    pub fn insert(&mut self, comb: Comb) -> DomainResult<()> {
        let id = comb.id().clone();
        if self.records.contains_key(&id) {
            return Err(DomainError::conflict(format!(
                "a comb with id {id} already exists"
            )));
        }
        self.records.insert(id, comb);
        Ok(())
    }

    /// Insert or overwrite, returning the displaced record if any.
    ///
    /// Only the loader uses this: duplicate ids inside a persisted
    /// document resolve to the last occurrence.
    pub(crate) fn replace(&mut self, comb: Comb) -> Option<Comb> {
        self.records.insert(comb.id().clone(), comb)
    }

    pub fn get(&self, id: &CombId) -> Option<&Comb> {
        self.records.get(id)
    }

    pub fn contains(&self, id: &CombId) -> bool {
        self.records.contains_key(id)
    }

    /// Overwrite the quantity on hand of an existing record.
    pub fn set_quantity(&mut self, id: &CombId, quantity: u32) -> DomainResult<()> {
        let comb = self.records.get_mut(id).ok_or(DomainError::NotFound)?;
        comb.set_quantity(quantity);
        Ok(())
    }

    /// Remove a record, returning it.
    pub fn remove(&mut self, id: &CombId) -> DomainResult<Comb> {
        self.records.remove(id).ok_or(DomainError::NotFound)
    }

    /// Iterate over records in id order.
    pub fn iter(&self) -> impl Iterator<Item = &Comb> {
        self.records.values()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
