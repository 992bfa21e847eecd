//! Property tests over the public API

use std::collections::HashSet;

use proptest::prelude::*;
use serde_json::json;

use adops::{Entity, EntityKind, Params, Record};

use crate::common::*;

fn kind_strategy() -> impl Strategy<Value = EntityKind> {
    proptest::sample::select(EntityKind::ALL.to_vec())
}

fn record_strategy() -> impl Strategy<Value = Record> {
    proptest::collection::btree_map("[a-zA-Z]{1,8}", any::<i32>(), 0..6)
        .prop_map(|m| m.into_iter().collect::<Record>())
}

proptest! {
    #[test]
    fn prop_dry_run_create_is_deterministic(
        names in proptest::collection::vec("[a-z]{1,10}", 1..8),
    ) {
        let (_, first) = dry_run();
        let (_, second) = dry_run();
        let entity = Entity::new(EntityKind::LineItem, &Params::new()).unwrap();
        let recs = named(&names.iter().map(String::as_str).collect::<Vec<_>>());

        let a = entity.create(&first, &recs).unwrap();
        let b = entity.create(&second, &recs).unwrap();
        prop_assert_eq!(a, b);
    }

    #[test]
    fn prop_simulated_records_differ_only_in_id(rec in record_strategy()) {
        let (_, ctx) = dry_run();
        let entity = Entity::new(EntityKind::Order, &Params::new()).unwrap();
        let out = entity.create(&ctx, std::slice::from_ref(&rec)).unwrap();

        prop_assert_eq!(out.len(), 1);
        let mut without_id = out[0].clone();
        let id = without_id.remove("id").unwrap();
        let mut expected = rec.clone();
        expected.remove("id");
        prop_assert_eq!(without_id, expected);
        prop_assert!(id.as_i64().is_some());
    }

    #[test]
    fn prop_normalization_is_idempotent(
        kind in kind_strategy(),
        width in 1i64..2000,
        height in 1i64..2000,
        name in "[a-z]{1,8}",
    ) {
        let params = Params::new()
            .with("name", name)
            .with("keyId", 3)
            .with("size", json!({"width": width, "height": height}));
        let once = Entity::new(kind, &params).unwrap();
        let twice = Entity::new(kind, once.params()).unwrap();
        prop_assert_eq!(once.params(), twice.params());
    }
}

#[test]
fn synthetic_ids_are_distinct_over_large_sample() {
    let (_, ctx) = dry_run();
    let entity = Entity::new(EntityKind::Creative, &Params::new()).unwrap();
    let recs: Vec<Record> = (0..10_000)
        .map(|i| Record::new().with("name", format!("creative-{i}")))
        .collect();

    let out = entity.create(&ctx, &recs).unwrap();
    let ids: HashSet<i64> = out.iter().map(|r| r.get_i64("id").unwrap()).collect();
    assert_eq!(ids.len(), recs.len());
}

#[test]
fn validate_ignores_result_order_and_extras() {
    let entity = Entity::new(EntityKind::Placement, &Params::new()).unwrap();
    let requested = named(&["a", "b", "c"]);
    let results = named(&["x", "c", "a", "b"]);
    entity.validate(&requested, &results).unwrap();
}
