//! Core types and traits for adops
//!
//! This crate defines the foundational types used throughout the system:
//! - Record: field map for one remote entity, before or after creation
//! - EntityKind: tag for every entity variant the platform exposes
//! - IdentityKey: value(s) matching a requested record to a created one
//! - SyntheticId: deterministic identifier assigned in dry-run mode
//! - Statement: typed filter passed to the remote query/action methods
//! - Error: error type hierarchy
//! - Traits: the remote platform boundary (AdManagerService)

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod contract;
pub mod error;
pub mod record;
pub mod statement;
pub mod traits;

pub use contract::{EntityKind, IdPrefix, IdentityKey, SyntheticId, MAX_ID_PREFIX_LEN};
pub use error::{Error, RemoteServiceError, Result, ValidationError};
pub use record::{Params, Record};
pub use statement::{Condition, Statement, DEFAULT_PAGE_LIMIT};
pub use traits::{Action, ActionResult, AdManagerService, RemoteResult};

/// Field holding the unique identifier of every created record.
pub const ID_FIELD: &str = "id";

/// Field holding the human-readable name of most entities.
pub const NAME_FIELD: &str = "name";
