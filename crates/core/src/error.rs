//! Error types for adops
//!
//! This module defines all error types used throughout the system.
//! We use `thiserror` for automatic `Display` and `Error` trait implementations.
//!
//! Two error kinds cross the core's boundary unchanged:
//! - [`RemoteServiceError`]: raised by the transport, propagated as-is
//! - [`ValidationError`]: raised when a bulk create silently dropped records

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::contract::{EntityKind, IdentityKey};

/// Result type alias for adops operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for entity operations
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// Transport or API failure reported by the remote platform
    #[error(transparent)]
    Remote(#[from] RemoteServiceError),

    /// Requested records were absent from a create result
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The entity kind has no remote method for this operation
    #[error("{kind} does not support {operation}")]
    Unsupported {
        /// Entity kind the operation was attempted on
        kind: EntityKind,
        /// Operation name (query, create, archive)
        operation: &'static str,
    },

    /// A record lacks the field its identity key is built from
    #[error("{kind} record is missing field '{field}'")]
    MissingField {
        /// Entity kind of the record
        kind: EntityKind,
        /// Name of the absent field
        field: String,
    },

    /// Caller parameters could not be normalized
    #[error("invalid parameters for {kind}: {reason}")]
    InvalidParams {
        /// Entity kind being constructed
        kind: EntityKind,
        /// What was wrong
        reason: String,
    },

    /// A variant name did not match any entity kind
    #[error("unknown entity kind: {name}")]
    UnknownKind {
        /// The name as supplied by the caller
        name: String,
    },

    /// Configuration could not be read, parsed or validated
    #[error("configuration error: {reason}")]
    Config {
        /// What was wrong
        reason: String,
    },
}

impl Error {
    /// Create a configuration error
    pub fn config(reason: impl Into<String>) -> Self {
        Error::Config {
            reason: reason.into(),
        }
    }

    /// Create an invalid-parameters error for a kind
    pub fn invalid_params(kind: EntityKind, reason: impl Into<String>) -> Self {
        Error::InvalidParams {
            kind,
            reason: reason.into(),
        }
    }

    /// Create an unsupported-operation error
    pub fn unsupported(kind: EntityKind, operation: &'static str) -> Self {
        Error::Unsupported { kind, operation }
    }

    /// The missing identity keys, if this is a validation failure
    pub fn missing_keys(&self) -> Option<&[IdentityKey]> {
        match self {
            Error::Validation(v) => Some(v.missing()),
            _ => None,
        }
    }
}

/// Failure raised by the remote platform transport.
///
/// The core never constructs these for its own failures; it only carries
/// them from an [`AdManagerService`](crate::AdManagerService) to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[error("{service}.{method} failed: {reason}")]
pub struct RemoteServiceError {
    /// Remote service name (e.g. "OrderService")
    pub service: String,
    /// Remote method name (e.g. "createOrders")
    pub method: String,
    /// Transport or API fault description
    pub reason: String,
}

impl RemoteServiceError {
    /// Create a remote error for a service method
    pub fn new(
        service: impl Into<String>,
        method: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self {
            service: service.into(),
            method: method.into(),
            reason: reason.into(),
        }
    }
}

/// Requested records that were not found after a create.
///
/// The remote platform may return a partial result list from a bulk create
/// without raising a fault. This error names every record that went missing,
/// in the order it was requested.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub struct ValidationError {
    kind: EntityKind,
    missing: Vec<IdentityKey>,
}

impl ValidationError {
    /// Create a validation error for the missing keys
    pub fn new(kind: EntityKind, missing: Vec<IdentityKey>) -> Self {
        Self { kind, missing }
    }

    /// Entity kind that was validated
    pub fn kind(&self) -> EntityKind {
        self.kind
    }

    /// Missing identity keys, in requested order
    pub fn missing(&self) -> &[IdentityKey] {
        &self.missing
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: following items were not found after creation: [",
            self.kind
        )?;
        for (i, key) in self.missing.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{key}")?;
        }
        f.write_str("]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_remote() {
        let err: Error = RemoteServiceError::new("OrderService", "createOrders", "quota").into();
        let msg = err.to_string();
        assert!(msg.contains("OrderService.createOrders"));
        assert!(msg.contains("quota"));
    }

    #[test]
    fn test_validation_display_names_every_key() {
        let err = ValidationError::new(
            EntityKind::TargetingKey,
            vec![IdentityKey::name("device"), IdentityKey::name("os")],
        );
        assert_eq!(
            err.to_string(),
            "TargetingKey: following items were not found after creation: [\"device\", \"os\"]"
        );
    }

    #[test]
    fn test_validation_display_pairs() {
        let err = ValidationError::new(EntityKind::Lica, vec![IdentityKey::pair(10, 20)]);
        assert!(err.to_string().ends_with("[(10, 20)]"));
    }

    #[test]
    fn test_missing_keys_accessor() {
        let err: Error =
            ValidationError::new(EntityKind::Order, vec![IdentityKey::name("o-1")]).into();
        assert_eq!(err.missing_keys(), Some(&[IdentityKey::name("o-1")][..]));
        assert_eq!(Error::config("x").missing_keys(), None);
    }

    #[test]
    fn test_error_display_unsupported() {
        let err = Error::unsupported(EntityKind::AdUnit, "create");
        assert_eq!(err.to_string(), "AdUnit does not support create");
    }

    #[test]
    fn test_error_pattern_matching() {
        let err = Error::invalid_params(EntityKind::Creative, "size.width is not an integer");
        match err {
            Error::InvalidParams { kind, reason } => {
                assert_eq!(kind, EntityKind::Creative);
                assert!(reason.contains("width"));
            }
            _ => panic!("Wrong error variant"),
        }
    }
}
