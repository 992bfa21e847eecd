//! Entity instances and their operations
//!
//! An [`Entity`] binds a catalog descriptor to normalized parameters. All
//! operations take an [`OperationContext`], which decides whether creates
//! and actions reach the platform or are simulated.

use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::{debug, info};

use adops_core::{
    Action, EntityKind, Error, IdentityKey, Params, Record, Result, Statement, ID_FIELD,
};

use crate::catalog::normalize::SIZE_FIELD;
use crate::catalog::{descriptor, EntityDescriptor, ReadMethod};
use crate::context::{ExecutionMode, OperationContext};
use crate::dry_run::{simulate_action, simulate_create};
use crate::validate::validate;

/// Result of a bulk action such as archiving orders
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ArchiveOutcome {
    /// Number of records changed (or that would be changed, in dry-run)
    pub num_changes: u64,
}

/// One entity of a given kind, described by normalized parameters
#[derive(Debug, Clone)]
pub struct Entity {
    descriptor: &'static EntityDescriptor,
    params: Params,
}

impl Entity {
    /// Construct an instance, normalizing the caller's parameters.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidParams` if the parameters cannot be normalized
    /// (for example a malformed creative `size`).
    pub fn new(kind: EntityKind, params: &Params) -> Result<Self> {
        let descriptor = descriptor(kind);
        let params = (descriptor.normalize)(kind, params)?;
        Ok(Self { descriptor, params })
    }

    /// Entity kind
    pub fn kind(&self) -> EntityKind {
        self.descriptor.kind
    }

    /// Static descriptor of the kind
    pub fn descriptor(&self) -> &'static EntityDescriptor {
        self.descriptor
    }

    /// Normalized parameters
    pub fn params(&self) -> &Params {
        &self.params
    }

    /// Create payload built from the parameters.
    ///
    /// Kinds without a create field list send every parameter. Otherwise only
    /// listed fields that are present are sent, and `size` is composed from
    /// `width` and `height` when both are set.
    pub fn record(&self) -> Record {
        let Some(fields) = self.descriptor.create_fields else {
            return self.params.clone();
        };
        let mut rec = Record::new();
        for field in fields {
            if *field == SIZE_FIELD {
                if let (Some(width), Some(height)) =
                    (self.params.get("width"), self.params.get("height"))
                {
                    rec.insert(SIZE_FIELD, json!({ "width": width, "height": height }));
                }
            } else if let Some(value) = self.params.get(field) {
                rec.insert(*field, value.clone());
            }
        }
        rec
    }

    /// Read records matching this instance's parameters.
    ///
    /// The filter uses only the kind's query fields. Singleton kinds return
    /// a one-element list.
    ///
    /// # Errors
    ///
    /// Returns `Error::Unsupported` if the kind cannot be read, or
    /// `Error::Remote` if the platform call fails.
    pub fn query(&self, ctx: &OperationContext) -> Result<Vec<Record>> {
        let d = self.descriptor;
        let records = match d.read {
            ReadMethod::None => return Err(Error::unsupported(d.kind, "query")),
            ReadMethod::Statement(method) => {
                let statement = Statement::from_params(&self.params, d.query_fields);
                debug!(
                    target: "adops::query",
                    kind = %d.kind,
                    query = %statement.to_query(),
                    "Built statement"
                );
                ctx.service().query(d.service, method, &statement)?
            }
            ReadMethod::Singleton(method) => vec![ctx.service().get_one(d.service, method)?],
        };
        info!(
            target: "adops::query",
            kind = %d.kind,
            service = d.service,
            count = records.len(),
            "Query complete"
        );
        Ok(records)
    }

    /// Create records of this kind.
    ///
    /// In dry-run mode the records are simulated locally; otherwise the
    /// platform's result is returned unchanged.
    ///
    /// # Errors
    ///
    /// Returns `Error::Unsupported` if the kind cannot be created, or
    /// `Error::Remote` if the platform call fails.
    pub fn create(&self, ctx: &OperationContext, records: &[Record]) -> Result<Vec<Record>> {
        let d = self.descriptor;
        let method = d
            .create_method
            .ok_or_else(|| Error::unsupported(d.kind, "create"))?;
        let created = match ctx.mode() {
            ExecutionMode::DryRun { prefix } => simulate_create(d.kind, prefix, records),
            ExecutionMode::Live => ctx.service().create(d.service, method, records)?,
        };
        info!(
            target: "adops::create",
            kind = %d.kind,
            dry_run = ctx.mode().is_dry_run(),
            requested = records.len(),
            created = created.len(),
            "Create complete"
        );
        Ok(created)
    }

    /// Create records and check that every one of them came back.
    ///
    /// # Errors
    ///
    /// As [`create`](Self::create), plus `Error::Validation` when records are
    /// missing from the result.
    pub fn create_validated(
        &self,
        ctx: &OperationContext,
        records: &[Record],
    ) -> Result<Vec<Record>> {
        let created = self.create(ctx, records)?;
        self.validate(records, &created)?;
        Ok(created)
    }

    /// Identity key of a record of this kind
    ///
    /// # Errors
    ///
    /// Returns `Error::MissingField` if the record lacks the key field(s).
    pub fn check_key(&self, record: &Record) -> Result<IdentityKey> {
        (self.descriptor.identity_key)(self.descriptor.kind, record)
    }

    /// Check that every requested record appears in `results`.
    ///
    /// # Errors
    ///
    /// Returns `Error::Validation` naming every missing key.
    pub fn validate(&self, requested: &[Record], results: &[Record]) -> Result<()> {
        validate(self.descriptor, requested, results)
    }

    /// Archive the orders whose ids are held in the `id` parameter.
    ///
    /// Dry-run reports how many orders would change without calling the
    /// platform. A null `id` or an empty id list selects nothing and is
    /// rejected in both modes, so an archive is never sent unfiltered.
    ///
    /// # Errors
    ///
    /// Returns `Error::Unsupported` for kinds other than orders,
    /// `Error::MissingField` when no `id` is set, or `Error::Remote` if the
    /// platform call fails.
    pub fn archive(&self, ctx: &OperationContext) -> Result<ArchiveOutcome> {
        let d = self.descriptor;
        let method = d
            .action_method
            .ok_or_else(|| Error::unsupported(d.kind, "archive"))?;
        let held = simulate_action(self.params.get(ID_FIELD));
        let ids = match self.params.get(ID_FIELD) {
            Some(ids) if held > 0 => ids,
            _ => {
                return Err(Error::MissingField {
                    kind: d.kind,
                    field: ID_FIELD.to_string(),
                })
            }
        };

        let num_changes = match ctx.mode() {
            ExecutionMode::DryRun { .. } => held,
            ExecutionMode::Live => {
                let statement = Statement::from_params(&self.params, &[ID_FIELD]);
                ctx.service()
                    .perform_action(d.service, method, Action::ArchiveOrders, &statement)?
                    .num_changes
            }
        };
        info!(
            target: "adops::archive",
            kind = %d.kind,
            dry_run = ctx.mode().is_dry_run(),
            ids = %ids,
            num_changes,
            "Archive complete"
        );
        Ok(ArchiveOutcome { num_changes })
    }
}
