//! Record store and persistence adapter.
//!
//! [`RecordStore`] is the in-memory mapping that is the source of truth
//! during a session; [`JsonFile`] loads it from and flushes it to a single
//! JSON document on disk.

pub mod json_file;
pub mod record_store;

pub use json_file::{JsonFile, LoadOutcome, SkippedEntry, StoreError};
pub use record_store::RecordStore;
