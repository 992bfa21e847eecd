//! Query statements
//!
//! The platform filters reads and actions with a PQL statement: a `WHERE`
//! clause over bind variables plus paging. `Statement` is the typed form;
//! transports render it with [`Statement::to_query`] and
//! [`Statement::bind_variables`], in-process backends evaluate it with
//! [`Statement::matches`].

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::record::Record;

/// Page size the platform accepts for a single read
pub const DEFAULT_PAGE_LIMIT: u32 = 500;

/// One `WHERE` term: the field must equal one of the values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Condition {
    /// Field name
    pub field: String,
    /// Accepted values; one value renders as `=`, several as `IN`
    pub values: Vec<Value>,
}

/// Typed filter for remote reads and actions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Statement {
    conditions: Vec<Condition>,
    limit: Option<u32>,
    offset: Option<u32>,
}

impl Default for Statement {
    fn default() -> Self {
        Self {
            conditions: Vec::new(),
            limit: Some(DEFAULT_PAGE_LIMIT),
            offset: None,
        }
    }
}

impl Statement {
    /// Empty statement with the default page limit
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a filter from parameters, keeping only `fields`, in that order.
    ///
    /// Array values become `IN` terms; null values are skipped.
    pub fn from_params(params: &Record, fields: &[&str]) -> Self {
        let mut statement = Self::new();
        for field in fields {
            match params.get(field) {
                None | Some(Value::Null) => {}
                Some(Value::Array(values)) => {
                    statement = statement.where_in(*field, values.iter().cloned());
                }
                Some(value) => {
                    statement = statement.where_eq(*field, value.clone());
                }
            }
        }
        statement
    }

    /// Add a `field = value` term
    pub fn where_eq(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.conditions.push(Condition {
            field: field.into(),
            values: vec![value.into()],
        });
        self
    }

    /// Add a `field IN (values)` term; an empty list adds nothing
    pub fn where_in(
        mut self,
        field: impl Into<String>,
        values: impl IntoIterator<Item = Value>,
    ) -> Self {
        let values: Vec<Value> = values.into_iter().collect();
        if !values.is_empty() {
            self.conditions.push(Condition {
                field: field.into(),
                values,
            });
        }
        self
    }

    /// Set the page limit; `None` removes it
    pub fn limit(mut self, limit: Option<u32>) -> Self {
        self.limit = limit;
        self
    }

    /// Set the page offset
    pub fn offset(mut self, offset: u32) -> Self {
        self.offset = Some(offset);
        self
    }

    /// The `WHERE` terms
    pub fn conditions(&self) -> &[Condition] {
        &self.conditions
    }

    /// Page limit, if any
    pub fn page_limit(&self) -> Option<u32> {
        self.limit
    }

    /// Page offset (0 when unset)
    pub fn page_offset(&self) -> u32 {
        self.offset.unwrap_or(0)
    }

    /// Whether the statement filters nothing
    pub fn is_unfiltered(&self) -> bool {
        self.conditions.is_empty()
    }

    /// Render the PQL text, e.g. `WHERE name = :name AND id IN (:id0, :id1) LIMIT 500`
    pub fn to_query(&self) -> String {
        let mut parts = Vec::new();
        if !self.conditions.is_empty() {
            let terms: Vec<String> = self
                .conditions
                .iter()
                .map(|c| match c.values.len() {
                    1 => format!("{} = :{}", c.field, c.field),
                    n => {
                        let binds: Vec<String> =
                            (0..n).map(|i| format!(":{}{}", c.field, i)).collect();
                        format!("{} IN ({})", c.field, binds.join(", "))
                    }
                })
                .collect();
            parts.push(format!("WHERE {}", terms.join(" AND ")));
        }
        if let Some(limit) = self.limit {
            parts.push(format!("LIMIT {limit}"));
        }
        if let Some(offset) = self.offset {
            parts.push(format!("OFFSET {offset}"));
        }
        parts.join(" ")
    }

    /// Bind variables referenced by [`Statement::to_query`], in order
    pub fn bind_variables(&self) -> Vec<(String, Value)> {
        let mut binds = Vec::new();
        for c in &self.conditions {
            if c.values.len() == 1 {
                binds.push((c.field.clone(), c.values[0].clone()));
            } else {
                for (i, v) in c.values.iter().enumerate() {
                    binds.push((format!("{}{}", c.field, i), v.clone()));
                }
            }
        }
        binds
    }

    /// Evaluate the `WHERE` clause against a record (paging is ignored)
    pub fn matches(&self, record: &Record) -> bool {
        self.conditions.iter().all(|c| match record.get(&c.field) {
            Some(value) => c.values.iter().any(|v| v == value),
            None => false,
        })
    }
}
