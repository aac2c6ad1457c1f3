//! The comb record: the one entity of this domain.

use serde::{Deserialize, Serialize};

use combstock_core::{DomainError, DomainResult, Entity};

use crate::id::CombId;

/// A comb held in stock.
///
/// Field names are renamed to match the persisted document
/// (`unitPrice`, `quantityOnHand`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comb {
    id: CombId,
    model: String,
    material: String,
    unit_price: f64,
    quantity_on_hand: u32,
}

impl Comb {
    /// Create a validated comb record.
    ///
    /// The price must be finite and non-negative. Model and material may be
    /// empty (the original data set contains unnamed stock).
    pub fn new(
        id: CombId,
        model: impl Into<String>,
        material: impl Into<String>,
        unit_price: f64,
        quantity_on_hand: u32,
    ) -> DomainResult<Self> {
        let comb = Self {
            id,
            model: model.into(),
            material: material.into(),
            unit_price,
            quantity_on_hand,
        };
        comb.validate()?;
        Ok(comb)
    }

    /// Re-check the record invariants.
    ///
    /// Deserialization bypasses [`Comb::new`], so loaders call this on every
    /// decoded record before admitting it to the store.
    pub fn validate(&self) -> DomainResult<()> {
        if self.id.as_str().trim().is_empty() {
            return Err(DomainError::invalid_id("id cannot be empty"));
        }
        if !self.unit_price.is_finite() {
            return Err(DomainError::validation("price must be a finite number"));
        }
        if self.unit_price < 0.0 {
            return Err(DomainError::validation("price cannot be negative"));
        }
        Ok(())
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn material(&self) -> &str {
        &self.material
    }

    pub fn unit_price(&self) -> f64 {
        self.unit_price
    }

    pub fn quantity_on_hand(&self) -> u32 {
        self.quantity_on_hand
    }

    /// Overwrite the quantity on hand (the only in-place mutation).
    pub fn set_quantity(&mut self, quantity: u32) {
        self.quantity_on_hand = quantity;
    }
}

impl Entity for Comb {
    type Id = CombId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
