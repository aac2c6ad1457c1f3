//! Strongly-typed comb identifier.

use core::str::FromStr;

use serde::{Deserialize, Serialize};

use combstock_core::DomainError;

/// Identifier of a comb record.
///
/// User-supplied (e.g. `"C001"`), trimmed on construction, never empty.
/// Ordered so the record store can offer a stable listing order.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CombId(String);

impl CombId {
    /// Create an identifier from raw user input.
    ///
    /// Surrounding whitespace is trimmed; an empty result is rejected.
    pub fn new(raw: &str) -> Result<Self, DomainError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(DomainError::invalid_id("id cannot be empty"));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for CombId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for CombId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_surrounding_whitespace() {
        let id = CombId::new("  C001 ").unwrap();
        assert_eq!(id.as_str(), "C001");
    }

    #[test]
    fn rejects_empty_input() {
        assert!(matches!(CombId::new(""), Err(DomainError::InvalidId(_))));
    }

    #[test]
    fn rejects_whitespace_only_input() {
        assert!(matches!(
            CombId::new("   \t"),
            Err(DomainError::InvalidId(_))
        ));
    }

    #[test]
    fn parses_via_from_str() {
        let id: CombId = "C002".parse().unwrap();
        assert_eq!(id.as_str(), "C002");
    }
}
