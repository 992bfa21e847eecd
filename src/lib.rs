//! adops - bulk entity operations for ad-inventory campaign setup
//!
//! adops creates and queries the entities a campaign setup needs (advertisers,
//! orders, line items, creatives, custom targeting) against the ad platform,
//! with a dry-run mode that simulates creates locally and assigns
//! deterministic synthetic ids.
//!
//! # Quick Start
//!
//! ```ignore
//! use std::sync::Arc;
//! use adops::{Entity, EntityKind, ExecutionMode, LocalAdManager, OperationContext, Params};
//!
//! let ctx = OperationContext::new(Arc::new(LocalAdManager::new()), ExecutionMode::Live);
//! let key = Entity::new(EntityKind::TargetingKey, &Params::new().with("name", "geo"))?;
//! let created = key.create_validated(&ctx, &[key.record()])?;
//! ```
//!
//! # Architecture
//!
//! Callers either use [`Entity`] directly or send [`Command`]s through the
//! [`Executor`]. Every operation receives an [`OperationContext`] that holds
//! the platform client and the execution mode; there is no global state.

// Re-export the public API from adops-executor
pub use adops_executor::*;
