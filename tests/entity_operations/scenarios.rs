//! Acceptance scenarios for entity operations

use serde_json::json;

use adops::{Entity, EntityKind, IdentityKey, Params};

use crate::common::*;

#[test]
fn scenario_a_dry_run_create_targeting_keys() {
    init_tracing();
    let (local, ctx) = dry_run();
    let key = Entity::new(EntityKind::TargetingKey, &Params::new()).unwrap();
    let requested = named(&["geo", "device"]);

    let created = key.create(&ctx, &requested).unwrap();

    assert_eq!(created.len(), 2);
    for rec in &created {
        let id = rec.id().unwrap().to_string();
        assert!(id.starts_with(PREFIX), "{id}");
    }
    key.validate(&requested, &created).unwrap();
    assert_eq!(local.call_count(), 0);
}

#[test]
fn scenario_b_missing_record_is_named() {
    let (local, ctx) = live();
    local.reject_name("device");
    let key = Entity::new(EntityKind::TargetingKey, &Params::new()).unwrap();
    let requested = named(&["geo", "device", "os"]);

    let created = key.create(&ctx, &requested).unwrap();
    assert_eq!(created.len(), 2);

    let err = key.validate(&requested, &created).unwrap_err();
    assert_eq!(err.missing_keys().unwrap(), &[IdentityKey::name("device")]);
    assert!(err.to_string().contains("[\"device\"]"));

    // create_validated reports the same failure
    let err = key.create_validated(&ctx, &requested).unwrap_err();
    assert_eq!(err.missing_keys().unwrap(), &[IdentityKey::name("device")]);
}

#[test]
fn scenario_c_advertiser_defaults_type() {
    let adv = Entity::new(EntityKind::Advertiser, &Params::new().with("name", "acme")).unwrap();
    assert_eq!(adv.params().get_str("type"), Some("ADVERTISER"));
    assert_eq!(adv.record().get_str("type"), Some("ADVERTISER"));
}

#[test]
fn scenario_d_creative_video_size_is_flattened() {
    let params = Params::new()
        .with("name", "pre-roll")
        .with("size", json!({"height": 250, "width": 300}));
    let video = Entity::new(EntityKind::CreativeVideo, &params).unwrap();

    assert_eq!(video.params().get_i64("height"), Some(250));
    assert_eq!(video.params().get_i64("width"), Some(300));
    assert!(!video.params().contains("size"));
    // caller data is never mutated
    assert!(params.contains("size"));
}

#[test]
fn scenario_e_dry_run_archive_counts_ids() {
    init_tracing();
    let (local, ctx) = dry_run();
    let order = Entity::new(
        EntityKind::Order,
        &Params::new().with("id", json!([1, 2, 3, 4, 5])),
    )
    .unwrap();

    let outcome = order.archive(&ctx).unwrap();

    assert_eq!(outcome.num_changes, 5);
    assert_eq!(local.call_count(), 0);
}

#[test]
fn lica_dry_run_chain_uses_simulated_ids() {
    let (_, ctx) = dry_run();
    let line_items = Entity::new(EntityKind::LineItem, &Params::new())
        .unwrap()
        .create_validated(&ctx, &named(&["li-1"]))
        .unwrap();
    let creatives = Entity::new(EntityKind::CreativeBanner, &Params::new())
        .unwrap()
        .create_validated(&ctx, &named(&["banner-1"]))
        .unwrap();

    let lica = Entity::new(EntityKind::Lica, &Params::new()).unwrap();
    let requested = vec![adops::Record::new()
        .with("lineItemId", line_items[0].id().unwrap().clone())
        .with("creativeId", creatives[0].id().unwrap().clone())];
    let created = lica.create_validated(&ctx, &requested).unwrap();

    let key = lica.check_key(&created[0]).unwrap();
    assert!(key.as_pair().is_some());
}

#[test]
fn query_filters_on_query_fields_only() {
    let (local, ctx) = live();
    local.seed(
        "CustomTargetingService",
        "CustomTargetingKeys",
        [
            adops::Record::new().with("name", "geo").with("type", "PREDEFINED"),
            adops::Record::new().with("name", "os").with("type", "FREEFORM"),
        ],
    );

    // TargetingKey filters by name only; the normalized `type` is not a query field
    let key = Entity::new(EntityKind::TargetingKey, &Params::new().with("name", "os")).unwrap();
    let found = key.query(&ctx).unwrap();

    assert_eq!(found.len(), 1);
    assert_eq!(found[0].get_str("type"), Some("FREEFORM"));
}

#[test]
fn singleton_query_returns_one_record() {
    let (local, ctx) = live();
    local.set_singleton(
        "getCurrentUser",
        adops::Record::new().with("id", 1).with("email", "ops@example.com"),
    );
    let user = Entity::new(EntityKind::CurrentUser, &Params::new()).unwrap();
    let found = user.query(&ctx).unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].get_str("email"), Some("ops@example.com"));
}

#[test]
fn targeting_values_bind_to_key() {
    let (local, ctx) = live();
    let values = Entity::new(EntityKind::TargetingValues, &Params::new().with("keyId", 42)).unwrap();
    let requested: Vec<_> = ["us", "ca"]
        .iter()
        .map(|n| {
            values
                .record()
                .with("name", *n)
        })
        .collect();
    values.create_validated(&ctx, &requested).unwrap();

    let found = values.query(&ctx).unwrap();
    assert_eq!(found.len(), 2);
    assert!(found.iter().all(|r| r.get_i64("customTargetingKeyId") == Some(42)));
    assert_eq!(local.records("CustomTargetingService", "CustomTargetingValues").len(), 2);
}
