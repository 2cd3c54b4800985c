//! Strongly-typed identifiers used across the billing engine.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::BillingError;

/// Identifier of a play in a play catalog (e.g. `"hamlet"`).
///
/// Catalog keys are free-form slugs chosen by whoever maintains the catalog,
/// so this wraps a string rather than a UUID.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayId(String);

impl PlayId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for PlayId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PlayId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for PlayId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl FromStr for PlayId {
    type Err = BillingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(BillingError::validation("PlayId: must not be empty"));
        }
        Ok(Self(trimmed.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_rejects_blank_ids() {
        assert!(matches!(
            "   ".parse::<PlayId>(),
            Err(BillingError::Validation(_))
        ));
        assert_eq!("  hamlet ".parse::<PlayId>().unwrap(), PlayId::new("hamlet"));
    }

    #[test]
    fn serializes_as_plain_string() {
        let json = serde_json::to_string(&PlayId::new("as-like")).unwrap();
        assert_eq!(json, "\"as-like\"");
    }
}
