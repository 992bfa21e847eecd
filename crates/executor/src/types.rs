//! Supporting types for commands and outputs.

use serde::{Deserialize, Serialize};

use adops_core::EntityKind;
use adops_engine::{EntityDescriptor, ReadMethod};

/// How an entity kind is read
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReadShape {
    /// Not readable
    None,
    /// Filtered list read
    Statement,
    /// Single record, no filter
    Singleton,
}

/// Serializable view of an entity descriptor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DescriptorInfo {
    /// Entity kind
    pub kind: EntityKind,
    /// Remote service
    pub service: String,
    /// Read shape
    pub read: ReadShape,
    /// Remote read method
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query_method: Option<String>,
    /// Remote create method
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub create_method: Option<String>,
    /// Remote action method
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action_method: Option<String>,
    /// Fields a read filter may use
    pub query_fields: Vec<String>,
    /// Fields sent on create, when restricted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub create_fields: Option<Vec<String>>,
}

impl From<&EntityDescriptor> for DescriptorInfo {
    fn from(d: &EntityDescriptor) -> Self {
        Self {
            kind: d.kind,
            service: d.service.to_string(),
            read: match d.read {
                ReadMethod::None => ReadShape::None,
                ReadMethod::Statement(_) => ReadShape::Statement,
                ReadMethod::Singleton(_) => ReadShape::Singleton,
            },
            query_method: d.read.method().map(str::to_string),
            create_method: d.create_method.map(str::to_string),
            action_method: d.action_method.map(str::to_string),
            query_fields: to_strings(d.query_fields),
            create_fields: d.create_fields.map(to_strings),
        }
    }
}

fn to_strings(fields: &[&str]) -> Vec<String> {
    fields.iter().map(|f| f.to_string()).collect()
}
