//! Entity Operation Tests
//!
//! End-to-end tests through the public `adops` API:
//! - Scenarios: dry-run create, partial results, normalization, archive
//! - Properties: id determinism, simulator and validator invariants
//! - Remote failures: propagated unchanged, never retried
//! - Config: `adops.toml` to operation context

mod common;

mod config_context;
mod properties;
mod remote_errors;
mod scenarios;
