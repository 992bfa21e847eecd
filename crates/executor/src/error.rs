//! Error types for command execution.
//!
//! All errors from command execution are represented by the [`Error`] enum.
//! Unlike the engine error, this one is serializable so a caller driving the
//! executor over JSON gets structured details back.

use serde::{Deserialize, Serialize};

use adops_core::IdentityKey;

/// Command execution errors.
///
/// | Category | Variants |
/// |----------|----------|
/// | Input | `UnknownKind`, `MissingField`, `InvalidParams` |
/// | Capability | `Unsupported` |
/// | Platform | `Remote`, `NotCreated` |
/// | System | `Config` |
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, thiserror::Error)]
pub enum Error {
    // ==================== Input ====================
    /// Kind name not in the catalog
    #[error("unknown entity kind: {name}")]
    UnknownKind {
        /// Name as given by the caller
        name: String,
    },

    /// Record lacks a required field
    #[error("{kind} is missing field '{field}'")]
    MissingField {
        /// Entity kind name
        kind: String,
        /// Absent field
        field: String,
    },

    /// Parameters cannot be normalized
    #[error("invalid {kind} parameters: {reason}")]
    InvalidParams {
        /// Entity kind name
        kind: String,
        /// What is wrong with them
        reason: String,
    },

    // ==================== Capability ====================
    /// Operation not available for the kind
    #[error("{kind} does not support {operation}")]
    Unsupported {
        /// Entity kind name
        kind: String,
        /// Operation requested
        operation: String,
    },

    // ==================== Platform ====================
    /// Remote call failed
    #[error("{service}.{method} failed: {reason}")]
    Remote {
        /// Platform service
        service: String,
        /// Service method
        method: String,
        /// Failure reported by the platform
        reason: String,
    },

    /// Requested records missing from a create result
    #[error("{kind}: following items were not found after creation: {}", render_keys(.missing))]
    NotCreated {
        /// Entity kind name
        kind: String,
        /// Identity keys of the dropped records, in request order
        missing: Vec<IdentityKey>,
    },

    // ==================== System ====================
    /// Invalid configuration
    #[error("configuration error: {reason}")]
    Config {
        /// What is wrong with it
        reason: String,
    },
}

fn render_keys(keys: &[IdentityKey]) -> String {
    let keys: Vec<String> = keys.iter().map(ToString::to_string).collect();
    format!("[{}]", keys.join(", "))
}

impl From<adops_core::Error> for Error {
    fn from(e: adops_core::Error) -> Self {
        use adops_core::Error as E;
        match e {
            E::Remote(r) => Error::Remote {
                service: r.service,
                method: r.method,
                reason: r.reason,
            },
            E::Validation(v) => Error::NotCreated {
                kind: v.kind().to_string(),
                missing: v.missing().to_vec(),
            },
            E::Unsupported { kind, operation } => Error::Unsupported {
                kind: kind.to_string(),
                operation: operation.to_string(),
            },
            E::MissingField { kind, field } => Error::MissingField {
                kind: kind.to_string(),
                field,
            },
            E::InvalidParams { kind, reason } => Error::InvalidParams {
                kind: kind.to_string(),
                reason,
            },
            E::UnknownKind { name } => Error::UnknownKind { name },
            E::Config { reason } => Error::Config { reason },
        }
    }
}
