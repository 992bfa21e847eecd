//! Remote platform boundary
//!
//! This module defines the `AdManagerService` trait that every backend
//! implements: a live SOAP/REST transport, or an in-process simulation.
//! Entity operations only ever talk to the platform through this trait.

use serde::{Deserialize, Serialize};

use crate::error::RemoteServiceError;
use crate::record::Record;
use crate::statement::Statement;

/// Result of a remote call
pub type RemoteResult<T> = std::result::Result<T, RemoteServiceError>;

/// Bulk action performed against records selected by a statement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    /// Archive orders (and their line items)
    ArchiveOrders,
}

impl Action {
    /// Wire type name of the action
    pub const fn type_name(&self) -> &'static str {
        match self {
            Action::ArchiveOrders => "ArchiveOrders",
        }
    }
}

/// Outcome of a bulk action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ActionResult {
    /// Number of records the action changed
    #[serde(rename = "numChanges")]
    pub num_changes: u64,
}

/// The ad platform, as seen by entity operations
///
/// Every method is a blocking request/response call. Implementations own
/// authentication, timeouts and transport faults; a fault is reported as a
/// [`RemoteServiceError`] and is never retried by the caller.
///
/// Thread safety: implementations must be `Send + Sync` so one client can be
/// shared by independent entity operations.
pub trait AdManagerService: Send + Sync {
    /// Read records matching a statement (`get*ByStatement`)
    ///
    /// # Errors
    ///
    /// Returns an error if the remote call fails.
    fn query(&self, service: &str, method: &str, statement: &Statement)
        -> RemoteResult<Vec<Record>>;

    /// Read a singleton record that takes no filter (`getCurrentNetwork`)
    ///
    /// # Errors
    ///
    /// Returns an error if the remote call fails.
    fn get_one(&self, service: &str, method: &str) -> RemoteResult<Record>;

    /// Create records (`create*`), returning them with ids populated.
    ///
    /// The platform may return fewer records than it was sent without
    /// raising a fault; callers detect that by validating the result.
    ///
    /// # Errors
    ///
    /// Returns an error if the remote call fails.
    fn create(&self, service: &str, method: &str, records: &[Record])
        -> RemoteResult<Vec<Record>>;

    /// Perform a bulk action on records selected by a statement
    ///
    /// # Errors
    ///
    /// Returns an error if the remote call fails.
    fn perform_action(
        &self,
        service: &str,
        method: &str,
        action: Action,
        statement: &Statement,
    ) -> RemoteResult<ActionResult>;
}
