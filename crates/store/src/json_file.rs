//! JSON-file persistence adapter.
//!
//! One document on disk holds the whole inventory as a pretty-printed JSON
//! array. Every save is a full rewrite; loads tolerate corruption by
//! discarding what cannot be decoded and reporting it through
//! [`LoadOutcome`] instead of failing.

use std::fs;
use std::path::{Path, PathBuf};

use combstock_core::Entity;
use combstock_inventory::Comb;

use crate::record_store::RecordStore;

/// Persistence-level error (infrastructure, not domain).
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// One persisted entry that could not be decoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedEntry {
    /// Position of the entry in the persisted array.
    pub index: usize,
    pub reason: String,
}

/// Result of loading the persisted document.
///
/// Corruption is data here, not an error: the caller decides how to report
/// a discarded document or skipped entries.
#[derive(Debug, Default)]
pub struct LoadOutcome {
    pub store: RecordStore,
    /// Entries individually dropped from an otherwise readable document.
    pub skipped: Vec<SkippedEntry>,
    /// Set when the whole document was unreadable and thrown away.
    pub discarded_document: Option<String>,
}

/// Handle to the JSON document backing a [`RecordStore`].
#[derive(Debug, Clone)]
pub struct JsonFile {
    path: PathBuf,
}

impl JsonFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the persisted document, if any.
    ///
    /// An absent file is an empty inventory. An unreadable document (bad
    /// JSON, or a root that is not an array) is discarded whole. Within a
    /// readable array, each element decodes independently; malformed
    /// elements are skipped and well-formed ones kept. Duplicate ids
    /// resolve to the last occurrence.
    pub fn load(&self) -> Result<LoadOutcome, StoreError> {
        if !self.path.exists() {
            return Ok(LoadOutcome::default());
        }

        let text = fs::read_to_string(&self.path)?;
        let root: serde_json::Value = match serde_json::from_str(&text) {
            Ok(value) => value,
            Err(err) => {
                return Ok(LoadOutcome {
                    discarded_document: Some(format!("not valid JSON: {err}")),
                    ..LoadOutcome::default()
                });
            }
        };

        let entries = match root {
            serde_json::Value::Array(entries) => entries,
            other => {
                return Ok(LoadOutcome {
                    discarded_document: Some(format!(
                        "document root is {}, expected an array",
                        value_kind(&other)
                    )),
                    ..LoadOutcome::default()
                });
            }
        };

        let mut outcome = LoadOutcome::default();
        for (index, entry) in entries.into_iter().enumerate() {
            let comb = match serde_json::from_value::<Comb>(entry) {
                Ok(comb) => comb,
                Err(err) => {
                    outcome.skipped.push(SkippedEntry {
                        index,
                        reason: err.to_string(),
                    });
                    continue;
                }
            };
            if let Err(err) = comb.validate() {
                outcome.skipped.push(SkippedEntry {
                    index,
                    reason: err.to_string(),
                });
                continue;
            }
            if let Some(displaced) = outcome.store.replace(comb) {
                tracing::debug!(id = %displaced.id(), "duplicate id in document, keeping last occurrence");
            }
        }
        Ok(outcome)
    }

    /// Overwrite the document with the current store contents.
    ///
    /// Writes a sibling temp file and renames it over the target, so the
    /// caller never observes a half-written document.
    pub fn save(&self, store: &RecordStore) -> Result<(), StoreError> {
        let records: Vec<&Comb> = store.iter().collect();
        let text = serde_json::to_string_pretty(&records)?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let mut tmp = self.path.as_os_str().to_owned();
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);
        fs::write(&tmp, text)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

fn value_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}
