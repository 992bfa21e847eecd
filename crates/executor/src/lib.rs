//! # adops Executor
//!
//! The command interface for adops entity operations.
//!
//! - [`Command`]/[`Output`] - serializable instruction set (for scripts and SDKs)
//! - [`Executor`] - runs commands against an [`OperationContext`]
//!
//! ## Quick Start
//!
//! ```text
//! use adops_executor::{Command, Executor, OperationContext};
//!
//! let executor = Executor::new(ctx);
//! let output = executor.execute(Command::Query {
//!     kind: "TargetingKey".into(),
//!     params: Params::new().with("name", "geo"),
//! })?;
//! ```
//!
//! ## Dry-run
//!
//! The context's [`ExecutionMode`] decides whether creates and archives reach
//! the platform. In dry-run mode created records come back with synthetic
//! ids and no remote mutation happens; reads still go to the platform.

#![warn(missing_docs)]

mod command;
mod error;
mod executor;
mod output;
mod types;

// Test modules
#[cfg(test)]
mod tests;

// =============================================================================
// Public API - Everything users need is re-exported here
// =============================================================================

pub use command::Command;
pub use error::Error;
pub use executor::Executor;
pub use output::Output;
pub use types::*;

// Re-export the domain types so users don't need adops-core directly
pub use adops_core::{EntityKind, IdPrefix, IdentityKey, Params, Record, SyntheticId};

// Re-export engine types needed to build an executor
pub use adops_engine::{
    ArchiveOutcome, Entity, ExecutionMode, LocalAdManager, OperationContext, OpsConfig,
};

/// Result type for executor operations
pub type Result<T> = std::result::Result<T, Error>;
