//! Common test utilities for entity operation tests

#![allow(dead_code)]

use std::sync::Arc;

use adops::{ExecutionMode, IdPrefix, LocalAdManager, OperationContext, Record};

/// Prefix used by dry-run tests
pub const PREFIX: &str = "99";

/// Fresh in-memory backend plus a live context over it
pub fn live() -> (Arc<LocalAdManager>, OperationContext) {
    let local = Arc::new(LocalAdManager::new());
    let ctx = OperationContext::new(local.clone(), ExecutionMode::Live);
    (local, ctx)
}

/// Fresh in-memory backend plus a dry-run context over it
pub fn dry_run() -> (Arc<LocalAdManager>, OperationContext) {
    let local = Arc::new(LocalAdManager::new());
    let prefix = IdPrefix::new(PREFIX).unwrap();
    let ctx = OperationContext::new(local.clone(), ExecutionMode::dry_run(prefix));
    (local, ctx)
}

/// Records carrying only a name
pub fn named(names: &[&str]) -> Vec<Record> {
    names.iter().map(|n| Record::new().with("name", *n)).collect()
}

/// Install a fmt subscriber once so `RUST_LOG` works while debugging tests
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}
