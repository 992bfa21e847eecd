//! Serialization tests for Command and Output enums.
//!
//! Commands arrive as JSON from scripts; these tests pin the wire shape.

use serde_json::json;

use crate::{ArchiveOutcome, Command, DescriptorInfo, EntityKind, Output, Params, Record};

/// Helper to test round-trip serialization of a Command.
fn test_command_round_trip(cmd: Command) {
    let json = serde_json::to_string(&cmd).expect("Failed to serialize command");
    let restored: Command = serde_json::from_str(&json).expect("Failed to deserialize command");
    assert_eq!(cmd, restored, "Command round-trip failed for: {}", json);
}

#[test]
fn test_command_query_from_json() {
    let cmd: Command = serde_json::from_value(json!({
        "Query": { "kind": "TargetingValues", "params": { "keyId": 5, "name": ["a", "b"] } }
    }))
    .unwrap();
    assert_eq!(
        cmd,
        Command::Query {
            kind: "TargetingValues".into(),
            params: Params::new().with("keyId", 5).with("name", json!(["a", "b"])),
        }
    );
}

#[test]
fn test_command_create_defaults() {
    let cmd: Command =
        serde_json::from_value(json!({ "Create": { "kind": "Order" } })).unwrap();
    assert_eq!(
        cmd,
        Command::Create {
            kind: "Order".into(),
            params: Params::new(),
            records: vec![],
            validate: false,
        }
    );
}

#[test]
fn test_command_rejects_unknown_fields() {
    let result: Result<Command, _> =
        serde_json::from_value(json!({ "Describe": { "kind": "Order", "extra": 1 } }));
    assert!(result.is_err());
}

#[test]
fn test_command_round_trips() {
    test_command_round_trip(Command::Create {
        kind: "LICA".into(),
        params: Params::new(),
        records: vec![Record::new().with("lineItemId", 1).with("creativeId", 2)],
        validate: true,
    });
    test_command_round_trip(Command::Archive {
        params: Params::new().with("id", 7),
    });
}

#[test]
fn test_output_shapes() {
    let archived = serde_json::to_value(Output::Archived(ArchiveOutcome { num_changes: 2 })).unwrap();
    assert_eq!(archived, json!({ "Archived": { "num_changes": 2 } }));

    let records = serde_json::to_value(Output::Records(vec![Record::new().with("id", 1)])).unwrap();
    assert_eq!(records, json!({ "Records": [{ "id": 1 }] }));
}

#[test]
fn test_descriptor_info_shape() {
    let info = DescriptorInfo::from(adops_engine::descriptor(EntityKind::Lica));
    let value = serde_json::to_value(&info).unwrap();
    assert_eq!(value["kind"], json!("LICA"));
    assert_eq!(value["read"], json!("none"));
    assert!(value.get("query_method").is_none());
    assert_eq!(value["create_method"], json!("createLineItemCreativeAssociations"));
}
