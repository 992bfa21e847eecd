//! Result validator
//!
//! After a create the platform may silently drop records. Validation compares
//! the identity keys of the requested records with those of the returned
//! records and reports every requested key that did not come back.

use std::collections::HashSet;

use tracing::{debug, warn};

use adops_core::{IdentityKey, Record, Result, ValidationError};

use crate::catalog::EntityDescriptor;

/// Check that every requested record appears in the create results.
///
/// Order is irrelevant. Result records that carry no identity key cannot
/// match anything and are ignored.
///
/// # Errors
///
/// Returns `Error::MissingField` if a requested record lacks its identity
/// key, or `Error::Validation` listing the missing keys in requested order.
pub fn validate(
    descriptor: &EntityDescriptor,
    requested: &[Record],
    results: &[Record],
) -> Result<()> {
    let kind = descriptor.kind;
    let found: HashSet<IdentityKey> = results
        .iter()
        .filter_map(|rec| (descriptor.identity_key)(kind, rec).ok())
        .collect();

    let mut missing = Vec::new();
    for rec in requested {
        let key = (descriptor.identity_key)(kind, rec)?;
        if !found.contains(&key) {
            missing.push(key);
        }
    }

    if missing.is_empty() {
        debug!(
            target: "adops::validate",
            kind = %kind,
            requested = requested.len(),
            returned = results.len(),
            "All requested records found"
        );
        return Ok(());
    }

    warn!(
        target: "adops::validate",
        kind = %kind,
        missing = missing.len(),
        requested = requested.len(),
        "Records missing after creation"
    );
    Err(ValidationError::new(kind, missing).into())
}
