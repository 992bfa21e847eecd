//! Identity hasher for dry-run ids
//!
//! The digest is XXH3-64 over the kind name and a canonical encoding of the
//! record. The encoding tags every value with its JSON type, length-prefixes
//! strings and containers, and visits object keys in sorted order, so the
//! digest depends only on record content: never on insertion order, memory
//! addresses or per-process seeds.

use serde_json::Value;
use xxhash_rust::xxh3::Xxh3;

use adops_core::{EntityKind, IdPrefix, Record, SyntheticId};

const KIND_SEPARATOR: u8 = 0x1F;

const TAG_NULL: u8 = 0;
const TAG_BOOL: u8 = 1;
const TAG_NUMBER: u8 = 2;
const TAG_STRING: u8 = 3;
const TAG_ARRAY: u8 = 4;
const TAG_OBJECT: u8 = 5;

/// Content digest of a record of the given kind.
pub fn identity_hash(kind: EntityKind, record: &Record) -> u64 {
    let mut hasher = Xxh3::new();
    hasher.update(kind.name().as_bytes());
    hasher.update(&[KIND_SEPARATOR]);
    hasher.update(&(record.len() as u64).to_le_bytes());
    for (field, value) in record {
        feed_str(&mut hasher, field);
        feed_value(&mut hasher, value);
    }
    hasher.digest()
}

/// Synthetic id for a record: prefix followed by its content digest.
pub fn synthetic_id(kind: EntityKind, prefix: &IdPrefix, record: &Record) -> SyntheticId {
    SyntheticId::new(prefix, identity_hash(kind, record))
}

fn feed_str(hasher: &mut Xxh3, s: &str) {
    hasher.update(&(s.len() as u64).to_le_bytes());
    hasher.update(s.as_bytes());
}

fn feed_value(hasher: &mut Xxh3, value: &Value) {
    match value {
        Value::Null => hasher.update(&[TAG_NULL]),
        Value::Bool(b) => hasher.update(&[TAG_BOOL, u8::from(*b)]),
        Value::Number(n) => {
            hasher.update(&[TAG_NUMBER]);
            feed_str(hasher, &n.to_string());
        }
        Value::String(s) => {
            hasher.update(&[TAG_STRING]);
            feed_str(hasher, s);
        }
        Value::Array(items) => {
            hasher.update(&[TAG_ARRAY]);
            hasher.update(&(items.len() as u64).to_le_bytes());
            for item in items {
                feed_value(hasher, item);
            }
        }
        Value::Object(map) => {
            hasher.update(&[TAG_OBJECT]);
            hasher.update(&(map.len() as u64).to_le_bytes());
            let mut entries: Vec<_> = map.iter().collect();
            entries.sort_by(|a, b| a.0.cmp(b.0));
            for (k, v) in entries {
                feed_str(hasher, k);
                feed_value(hasher, v);
            }
        }
    }
}
