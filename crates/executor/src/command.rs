//! Command enum defining all adops operations.
//!
//! Commands are self-contained and serializable: every parameter needed for
//! execution is in the variant, and a command can be read from JSON written
//! by a script or another language.

use serde::{Deserialize, Serialize};

use adops_core::{Params, Record};

/// A command is a self-contained, serializable operation.
///
/// | Command | Returns |
/// |---------|---------|
/// | `Query` | `Output::Records` |
/// | `Create` | `Output::Records` |
/// | `Archive` | `Output::Archived` |
/// | `Describe` | `Output::Descriptor` |
///
/// `kind` is an entity kind name (`"TargetingKey"`, `"LICA"`) or its
/// snake-case id (`"targeting_key"`).
///
/// # Example
///
/// ```ignore
/// use adops_executor::{Command, Params};
///
/// let cmd = Command::Create {
///     kind: "TargetingKey".into(),
///     params: Params::new().with("name", "geo"),
///     records: vec![],
///     validate: true,
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub enum Command {
    /// Read records matching the parameters.
    /// Returns: `Output::Records`
    Query {
        kind: String,
        #[serde(default)]
        params: Params,
    },

    /// Create records.
    ///
    /// With an empty `records` list the single record built from `params`
    /// is created. With `validate`, every requested record must come back.
    /// Returns: `Output::Records`
    Create {
        kind: String,
        #[serde(default)]
        params: Params,
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        records: Vec<Record>,
        #[serde(default)]
        validate: bool,
    },

    /// Archive the orders whose ids are held in `params.id`.
    /// Returns: `Output::Archived`
    Archive {
        #[serde(default)]
        params: Params,
    },

    /// Describe an entity kind's remote binding.
    /// Returns: `Output::Descriptor`
    Describe { kind: String },
}

impl Command {
    /// Short name of the command, for logs
    pub fn name(&self) -> &'static str {
        match self {
            Command::Query { .. } => "Query",
            Command::Create { .. } => "Create",
            Command::Archive { .. } => "Archive",
            Command::Describe { .. } => "Describe",
        }
    }
}
