//! Test modules for the executor crate.

pub mod serialization;

use std::sync::Arc;

use crate::{ExecutionMode, Executor, IdPrefix, LocalAdManager, OperationContext};

/// Executor over a fresh in-memory backend, in live mode.
pub(crate) fn live_executor() -> (Arc<LocalAdManager>, Executor) {
    let local = Arc::new(LocalAdManager::new());
    let ctx = OperationContext::new(local.clone(), ExecutionMode::Live);
    (local, Executor::new(ctx))
}

/// Executor over a fresh in-memory backend, in dry-run mode with prefix "99".
pub(crate) fn dry_run_executor() -> (Arc<LocalAdManager>, Executor) {
    let local = Arc::new(LocalAdManager::new());
    let prefix = IdPrefix::new("99").unwrap();
    let ctx = OperationContext::new(local.clone(), ExecutionMode::dry_run(prefix));
    (local, Executor::new(ctx))
}
