//! Contract types shared by every entity operation
//!
//! ## Module Structure
//!
//! - `entity_kind`: Entity variant enumeration (the catalog's tag)
//! - `identity_key`: Value(s) matching a requested record to a result
//! - `synthetic_id`: Dry-run identifier prefix and synthetic identifiers
//!
//! ## Usage
//!
//! ```
//! use adops_core::contract::{EntityKind, IdentityKey, IdPrefix, SyntheticId};
//! ```

pub mod entity_kind;
pub mod identity_key;
pub mod synthetic_id;

// Re-exports
pub use entity_kind::EntityKind;
pub use identity_key::IdentityKey;
pub use synthetic_id::{IdPrefix, SyntheticId, MAX_ID_PREFIX_LEN};
