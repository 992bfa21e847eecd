//! Output enum for command execution results.
//!
//! Every command produces exactly one output variant.

use serde::{Deserialize, Serialize};

use adops_core::Record;
use adops_engine::ArchiveOutcome;

use crate::types::DescriptorInfo;

/// Successful command execution results.
///
/// Each [`Command`](crate::Command) variant maps to exactly one `Output` variant.
///
/// ```text
/// match executor.execute(Command::Query { kind, params })? {
///     Output::Records(records) => println!("{} found", records.len()),
///     _ => unreachable!("Query always returns Records"),
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Output {
    /// Records read or created
    Records(Vec<Record>),

    /// Outcome of an archive action
    Archived(ArchiveOutcome),

    /// Remote binding of an entity kind
    Descriptor(DescriptorInfo),
}

impl Output {
    /// The records, if this output carries any
    pub fn records(&self) -> Option<&[Record]> {
        match self {
            Output::Records(records) => Some(records),
            _ => None,
        }
    }
}
