//! Strongly-typed ID wrappers for all entity types
//!
//! Using newtype wrappers prevents accidentally mixing up IDs from different
//! entity types at compile time.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Macro to generate ID newtype wrappers
macro_rules! define_id {
    ($name:ident, $display_prefix:literal) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            /// Create a new random ID
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            /// Create an ID from an existing UUID
            pub fn from_uuid(uuid: Uuid) -> Self {
                Self(uuid)
            }

            /// Get the underlying UUID
            pub fn as_uuid(&self) -> &Uuid {
                &self.0
            }

            /// Parse an ID from a string
            pub fn parse(s: &str) -> Result<Self, uuid::Error> {
                Ok(Self(Uuid::parse_str(s)?))
            }

            /// Whether a user-typed key refers to this ID.
            ///
            /// Accepts the full UUID, the short display form, or the short
            /// form without its prefix.
            pub fn matches_key(&self, key: &str) -> bool {
                let key = key.trim();
                if key.is_empty() {
                    return false;
                }
                let full = self.0.to_string();
                let key = key.strip_prefix($display_prefix).unwrap_or(key);
                full == key || (key.len() >= 8 && full.starts_with(key))
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}{}", $display_prefix, &self.0.to_string()[..8])
            }
        }

        impl From<Uuid> for $name {
            fn from(uuid: Uuid) -> Self {
                Self(uuid)
            }
        }

        impl FromStr for $name {
            type Err = uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                if let Ok(uuid) = Uuid::parse_str(s) {
                    return Ok(Self(uuid));
                }
                let s = s.strip_prefix($display_prefix).unwrap_or(s);
                Ok(Self(Uuid::parse_str(s)?))
            }
        }
    };
}

define_id!(TransactionId, "txn-");
define_id!(BudgetId, "bud-");
define_id!(GoalId, "gol-");
define_id!(DebtId, "dbt-");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_display() {
        let id = DebtId::new();
        let display = format!("{}", id);
        assert!(display.starts_with("dbt-"));
        assert_eq!(display.len(), 12);
    }

    #[test]
    fn test_id_equality() {
        let id1 = GoalId::new();
        let id2 = id1;
        assert_eq!(id1, id2);
        assert_ne!(id1, GoalId::new());
    }

    #[test]
    fn test_id_serialization() {
        let id = TransactionId::new();
        let json = serde_json::to_string(&id).unwrap();
        let deserialized: TransactionId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, deserialized);
    }

    #[test]
    fn test_matches_key() {
        let id = BudgetId::parse("550e8400-e29b-41d4-a716-446655440000").unwrap();
        assert!(id.matches_key("550e8400-e29b-41d4-a716-446655440000"));
        assert!(id.matches_key("bud-550e8400"));
        assert!(id.matches_key("550e8400"));
        assert!(!id.matches_key("550e"));
        assert!(!id.matches_key(""));
        assert!(!id.matches_key("bud-deadbeef"));
    }
}
