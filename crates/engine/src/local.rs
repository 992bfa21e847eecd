//! In-memory platform backend
//!
//! `LocalAdManager` implements [`AdManagerService`] over tables guarded by a
//! `parking_lot::Mutex`. A table is identified by the service and the entity
//! noun of the method (`getOrdersByStatement` and `createOrders` both use
//! the `Orders` table of `OrderService`). It assigns sequential ids on create,
//! evaluates statements in-process and records every call, which makes it
//! the backend for tests and offline runs. Faults and silently dropped
//! records can be injected to exercise error paths.

use std::collections::{BTreeMap, HashSet};

use parking_lot::Mutex;
use serde_json::Value;
use tracing::trace;

use adops_core::{
    Action, ActionResult, AdManagerService, Record, RemoteResult, RemoteServiceError, Statement,
    ID_FIELD,
};

/// First id assigned by a fresh backend
pub const FIRST_LOCAL_ID: i64 = 1_000;

/// One call received by the backend
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedCall {
    /// Remote service name
    pub service: String,
    /// Remote method name
    pub method: String,
    /// Number of records sent (creates only)
    pub records: usize,
}

/// Entity table a method reads or writes.
///
/// `get<Noun>ByStatement`, `create<Noun>` and `perform<Singular>Action`
/// all map to `<Noun>`; action methods name the singular, so an `s` is
/// appended.
pub fn table_name(method: &str) -> String {
    if let Some(singular) = method
        .strip_prefix("perform")
        .and_then(|m| m.strip_suffix("Action"))
    {
        return format!("{singular}s");
    }
    let noun = method
        .strip_prefix("get")
        .or_else(|| method.strip_prefix("create"))
        .unwrap_or(method);
    noun.strip_suffix("ByStatement").unwrap_or(noun).to_string()
}

type TableKey = (String, String);

fn table_key(service: &str, table: &str) -> TableKey {
    (service.to_string(), table.to_string())
}

#[derive(Debug, Default)]
struct State {
    tables: BTreeMap<TableKey, Vec<Record>>,
    singletons: BTreeMap<String, Record>,
    archived: HashSet<i64>,
    rejected_names: HashSet<String>,
    failing_methods: BTreeMap<String, String>,
    calls: Vec<RecordedCall>,
    next_id: i64,
}

/// In-memory [`AdManagerService`]
#[derive(Debug)]
pub struct LocalAdManager {
    state: Mutex<State>,
}

impl Default for LocalAdManager {
    fn default() -> Self {
        Self::new()
    }
}

impl LocalAdManager {
    /// Create an empty backend
    pub fn new() -> Self {
        Self {
            state: Mutex::new(State {
                next_id: FIRST_LOCAL_ID,
                ..State::default()
            }),
        }
    }

    /// Store existing records in a table, assigning ids where missing
    pub fn seed(&self, service: &str, table: &str, records: impl IntoIterator<Item = Record>) {
        let mut state = self.state.lock();
        for mut rec in records {
            if rec.id().is_none() {
                let id = state.allocate_id();
                rec.insert(ID_FIELD, id);
            }
            state
                .tables
                .entry(table_key(service, table))
                .or_default()
                .push(rec);
        }
    }

    /// Set the record returned by a singleton read (`getCurrentNetwork`)
    pub fn set_singleton(&self, method: &str, record: Record) {
        self.state.lock().singletons.insert(method.to_string(), record);
    }

    /// Drop records with this name on create without raising a fault
    pub fn reject_name(&self, name: &str) {
        self.state.lock().rejected_names.insert(name.to_string());
    }

    /// Make every call to `method` fail with `reason`
    pub fn fail_method(&self, method: &str, reason: &str) {
        self.state
            .lock()
            .failing_methods
            .insert(method.to_string(), reason.to_string());
    }

    /// Records stored in a table
    pub fn records(&self, service: &str, table: &str) -> Vec<Record> {
        self.state
            .lock()
            .tables
            .get(&table_key(service, table))
            .cloned()
            .unwrap_or_default()
    }

    /// Whether the record with this id has been archived
    pub fn is_archived(&self, id: i64) -> bool {
        self.state.lock().archived.contains(&id)
    }

    /// Every call received so far, in order
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.state.lock().calls.clone()
    }

    /// Number of calls received so far
    pub fn call_count(&self) -> usize {
        self.state.lock().calls.len()
    }
}

impl State {
    fn allocate_id(&mut self) -> i64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Record the call, then fail it if a fault was injected
    fn enter(&mut self, service: &str, method: &str, records: usize) -> RemoteResult<()> {
        trace!(target: "adops::local", service, method, records, "Call");
        self.calls.push(RecordedCall {
            service: service.to_string(),
            method: method.to_string(),
            records,
        });
        match self.failing_methods.get(method) {
            Some(reason) => Err(RemoteServiceError::new(service, method, reason.as_str())),
            None => Ok(()),
        }
    }

    fn matching<'a>(
        &'a self,
        service: &str,
        method: &str,
        statement: &'a Statement,
    ) -> impl Iterator<Item = &'a Record> + 'a {
        self.tables
            .get(&table_key(service, &table_name(method)))
            .into_iter()
            .flatten()
            .filter(move |rec| statement.matches(rec))
    }
}

impl AdManagerService for LocalAdManager {
    fn query(
        &self,
        service: &str,
        method: &str,
        statement: &Statement,
    ) -> RemoteResult<Vec<Record>> {
        let mut state = self.state.lock();
        state.enter(service, method, 0)?;
        let limit = statement.page_limit().map_or(usize::MAX, |l| l as usize);
        Ok(state
            .matching(service, method, statement)
            .skip(statement.page_offset() as usize)
            .take(limit)
            .cloned()
            .collect())
    }

    fn get_one(&self, service: &str, method: &str) -> RemoteResult<Record> {
        let mut state = self.state.lock();
        state.enter(service, method, 0)?;
        state
            .singletons
            .get(method)
            .cloned()
            .ok_or_else(|| RemoteServiceError::new(service, method, "no record configured"))
    }

    fn create(
        &self,
        service: &str,
        method: &str,
        records: &[Record],
    ) -> RemoteResult<Vec<Record>> {
        let mut state = self.state.lock();
        state.enter(service, method, records.len())?;
        let key = table_key(service, &table_name(method));
        let mut created = Vec::with_capacity(records.len());
        for rec in records {
            if rec
                .name()
                .map_or(false, |n| state.rejected_names.contains(n))
            {
                continue;
            }
            let mut stored = rec.clone();
            let id = state.allocate_id();
            stored.insert(ID_FIELD, id);
            state
                .tables
                .entry(key.clone())
                .or_default()
                .push(stored.clone());
            created.push(stored);
        }
        Ok(created)
    }

    fn perform_action(
        &self,
        service: &str,
        method: &str,
        action: Action,
        statement: &Statement,
    ) -> RemoteResult<ActionResult> {
        let mut state = self.state.lock();
        state.enter(service, method, 0)?;
        let ids: Vec<i64> = state
            .matching(service, method, statement)
            .filter_map(|rec| rec.id().and_then(Value::as_i64))
            .collect();
        let mut num_changes = 0;
        for id in ids {
            if state.archived.insert(id) {
                num_changes += 1;
            }
        }
        trace!(
            target: "adops::local",
            action = action.type_name(),
            num_changes,
            "Performed action"
        );
        Ok(ActionResult { num_changes })
    }
}
