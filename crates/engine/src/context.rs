//! Operation context: the transport plus the execution mode.
//!
//! Every entity operation receives its context explicitly. There is no
//! process-wide client or dry-run flag.

use std::fmt;
use std::sync::Arc;

use adops_core::{AdManagerService, IdPrefix, Result};

use crate::config::OpsConfig;

/// How creates and actions are carried out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExecutionMode {
    /// Calls reach the remote platform and mutate it.
    Live,
    /// Creates and actions are simulated locally; reads still go remote.
    DryRun {
        /// Digits prepended to synthetic ids
        prefix: IdPrefix,
    },
}

impl ExecutionMode {
    /// Dry-run mode with the given prefix
    pub fn dry_run(prefix: IdPrefix) -> Self {
        ExecutionMode::DryRun { prefix }
    }

    /// Whether mutations are simulated
    pub fn is_dry_run(&self) -> bool {
        matches!(self, ExecutionMode::DryRun { .. })
    }
}

/// Transport and mode shared by the operations of one invocation.
#[derive(Clone)]
pub struct OperationContext {
    service: Arc<dyn AdManagerService>,
    mode: ExecutionMode,
}

impl OperationContext {
    /// Create a context around a platform client
    pub fn new(service: Arc<dyn AdManagerService>, mode: ExecutionMode) -> Self {
        Self { service, mode }
    }

    /// Create a context whose mode comes from a loaded config
    ///
    /// # Errors
    ///
    /// Returns an error if the config's id prefix is invalid.
    pub fn from_config(service: Arc<dyn AdManagerService>, config: &OpsConfig) -> Result<Self> {
        Ok(Self::new(service, config.execution_mode()?))
    }

    /// The platform client
    pub fn service(&self) -> &dyn AdManagerService {
        self.service.as_ref()
    }

    /// The execution mode
    pub fn mode(&self) -> &ExecutionMode {
        &self.mode
    }

    /// Same transport, different mode
    pub fn with_mode(&self, mode: ExecutionMode) -> Self {
        Self {
            service: Arc::clone(&self.service),
            mode,
        }
    }
}

impl fmt::Debug for OperationContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OperationContext")
            .field("mode", &self.mode)
            .finish_non_exhaustive()
    }
}
