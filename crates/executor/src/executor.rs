//! The Executor - single entry point to entity operations.
//!
//! The Executor is a stateless dispatcher: it parses the kind named by a
//! command, builds the entity instance and runs the operation against the
//! operation context it was created with.

use tracing::debug;

use adops_core::EntityKind;
use adops_engine::{descriptor, Entity, OperationContext};

use crate::{Command, DescriptorInfo, Output, Result};

/// The command executor.
///
/// The Executor holds the [`OperationContext`] (transport and execution
/// mode) and no state of its own.
///
/// # Thread Safety
///
/// Executor is `Send + Sync` and can be shared across threads.
///
/// # Example
///
/// ```ignore
/// use std::sync::Arc;
/// use adops_executor::{Command, ExecutionMode, Executor, LocalAdManager, OperationContext};
///
/// let ctx = OperationContext::new(Arc::new(LocalAdManager::new()), ExecutionMode::Live);
/// let executor = Executor::new(ctx);
///
/// let results = executor.execute_many(vec![
///     Command::Describe { kind: "Order".into() },
///     Command::Describe { kind: "LICA".into() },
/// ]);
/// ```
pub struct Executor {
    ctx: OperationContext,
}

impl Executor {
    /// Create a new executor around an operation context.
    pub fn new(ctx: OperationContext) -> Self {
        Self { ctx }
    }

    /// Execute a single command.
    ///
    /// Returns the command result or an error.
    pub fn execute(&self, cmd: Command) -> Result<Output> {
        debug!(
            target: "adops::executor",
            command = cmd.name(),
            dry_run = self.ctx.mode().is_dry_run(),
            "Executing"
        );
        match cmd {
            Command::Query { kind, params } => {
                let entity = Entity::new(parse_kind(&kind)?, &params)?;
                Ok(Output::Records(entity.query(&self.ctx)?))
            }
            Command::Create {
                kind,
                params,
                records,
                validate,
            } => {
                let entity = Entity::new(parse_kind(&kind)?, &params)?;
                let records = if records.is_empty() {
                    vec![entity.record()]
                } else {
                    records
                };
                let created = if validate {
                    entity.create_validated(&self.ctx, &records)?
                } else {
                    entity.create(&self.ctx, &records)?
                };
                Ok(Output::Records(created))
            }
            Command::Archive { params } => {
                let order = Entity::new(EntityKind::Order, &params)?;
                Ok(Output::Archived(order.archive(&self.ctx)?))
            }
            Command::Describe { kind } => {
                let info = DescriptorInfo::from(descriptor(parse_kind(&kind)?));
                Ok(Output::Descriptor(info))
            }
        }
    }

    /// Execute multiple commands sequentially.
    ///
    /// Returns one result per command, in order. A failing command does not
    /// stop the ones after it.
    pub fn execute_many(&self, cmds: Vec<Command>) -> Vec<Result<Output>> {
        cmds.into_iter().map(|cmd| self.execute(cmd)).collect()
    }

    /// The operation context commands run against.
    pub fn context(&self) -> &OperationContext {
        &self.ctx
    }
}

fn parse_kind(name: &str) -> Result<EntityKind> {
    Ok(name.parse::<EntityKind>()?)
}
