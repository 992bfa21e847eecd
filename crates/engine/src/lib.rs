//! Entity operations for adops
//!
//! This crate sits between callers and the remote platform:
//! - Catalog: one static descriptor per entity kind
//! - Entity: query, create, validate and archive for one instance
//! - Dry-run: synthetic ids and simulated actions, no remote mutation
//! - Config: `adops.toml` and the execution mode derived from it
//! - Local backend: in-memory `AdManagerService` for tests and offline runs
//!
//! The engine never holds process-wide state. Every operation receives an
//! [`OperationContext`] carrying the transport and the execution mode.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod catalog;
pub mod config;
pub mod context;
pub mod dry_run;
pub mod entity;
pub mod identity;
pub mod local;
pub mod validate;

pub use catalog::{descriptor, EntityDescriptor, ReadMethod};
pub use config::{DryRunIdConfig, OpsConfig, PlatformConfig, CONFIG_FILE_NAME};
pub use context::{ExecutionMode, OperationContext};
pub use dry_run::{simulate_action, simulate_create};
pub use entity::{ArchiveOutcome, Entity};
pub use identity::{identity_hash, synthetic_id};
pub use local::{LocalAdManager, RecordedCall};
pub use validate::validate;
