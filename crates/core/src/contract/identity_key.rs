//! Identity keys
//!
//! An identity key is what the validator compares to decide whether a
//! requested record came back from a create. Most kinds use the entity
//! name; association kinds use the pair of ids they link.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Value(s) identifying a record within one create batch
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum IdentityKey {
    /// Entity name
    Name(String),
    /// Two related identifiers, e.g. (lineItemId, creativeId)
    Pair(i64, i64),
}

impl IdentityKey {
    /// Name key
    pub fn name(name: impl Into<String>) -> Self {
        IdentityKey::Name(name.into())
    }

    /// Two-part key
    pub const fn pair(first: i64, second: i64) -> Self {
        IdentityKey::Pair(first, second)
    }

    /// The two parts, if this is a pair key
    pub const fn as_pair(&self) -> Option<(i64, i64)> {
        match self {
            IdentityKey::Pair(a, b) => Some((*a, *b)),
            IdentityKey::Name(_) => None,
        }
    }
}

impl fmt::Display for IdentityKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IdentityKey::Name(name) => write!(f, "{name:?}"),
            IdentityKey::Pair(a, b) => write!(f, "({a}, {b})"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(IdentityKey::name("geo").to_string(), "\"geo\"");
        assert_eq!(IdentityKey::pair(1, 2).to_string(), "(1, 2)");
    }

    #[test]
    fn test_pair_order_matters() {
        assert_ne!(IdentityKey::pair(1, 2), IdentityKey::pair(2, 1));
        assert_eq!(IdentityKey::pair(1, 2).as_pair(), Some((1, 2)));
        assert_eq!(IdentityKey::name("x").as_pair(), None);
    }

    #[test]
    fn test_untagged_serialization() {
        assert_eq!(serde_json::to_string(&IdentityKey::name("geo")).unwrap(), "\"geo\"");
        assert_eq!(serde_json::to_string(&IdentityKey::pair(3, 4)).unwrap(), "[3,4]");
    }
}
