//! Dry-run simulator
//!
//! Stands in for the remote create call: returns copies of the requested
//! records, each with a synthetic `id`. No remote call is made and the
//! caller's records are left untouched.

use tracing::debug;

use adops_core::{EntityKind, IdPrefix, Record, ID_FIELD};

use crate::identity::synthetic_id;

/// Simulate a bulk create.
///
/// The result has the same length and order as `records`. Each copy differs
/// from its original only in the `id` field, which is added or overwritten
/// with the id derived from the original's content.
pub fn simulate_create(kind: EntityKind, prefix: &IdPrefix, records: &[Record]) -> Vec<Record> {
    let out: Vec<Record> = records
        .iter()
        .map(|rec| {
            let id = synthetic_id(kind, prefix, rec);
            let mut copy = rec.clone();
            copy.insert(ID_FIELD, id);
            copy
        })
        .collect();
    debug!(target: "adops::dry_run", kind = %kind, count = out.len(), "Simulated create");
    out
}

/// Simulated record count for a bulk action over `ids`.
///
/// An array counts its elements, a single value counts as one, an absent
/// or null value as zero.
pub fn simulate_action(ids: Option<&serde_json::Value>) -> u64 {
    match ids {
        None | Some(serde_json::Value::Null) => 0,
        Some(serde_json::Value::Array(items)) => items.len() as u64,
        Some(_) => 1,
    }
}
