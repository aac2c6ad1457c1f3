//! Comb inventory domain model.
//!
//! This crate contains the business rules for comb records, implemented
//! purely as deterministic domain logic (no IO, no console, no storage).

pub mod comb;
pub mod id;

pub use comb::Comb;
pub use id::CombId;
