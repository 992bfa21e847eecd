//! Remote failures surface to the caller unchanged

use adops::{Entity, EntityKind, Params};
use adops_core::{Error, RemoteServiceError};

use crate::common::*;

#[test]
fn create_fault_propagates_without_retry() {
    let (local, ctx) = live();
    local.fail_method("createLineItems", "QUOTA_EXCEEDED");
    let entity = Entity::new(EntityKind::LineItem, &Params::new()).unwrap();

    let err = entity.create(&ctx, &named(&["li"])).unwrap_err();

    assert_eq!(
        err,
        Error::Remote(RemoteServiceError::new(
            "LineItemService",
            "createLineItems",
            "QUOTA_EXCEEDED"
        ))
    );
    assert_eq!(local.call_count(), 1);
}

#[test]
fn query_fault_propagates_in_dry_run() {
    let (local, ctx) = dry_run();
    local.fail_method("getAdUnitsByStatement", "AUTHENTICATION_ERROR");
    let entity = Entity::new(EntityKind::AdUnit, &Params::new()).unwrap();

    let err = entity.query(&ctx).unwrap_err();
    assert!(matches!(err, Error::Remote(ref r) if r.reason == "AUTHENTICATION_ERROR"));
}

#[test]
fn archive_fault_propagates() {
    init_tracing();
    let (local, ctx) = live();
    local.fail_method("performOrderAction", "NOT_ALLOWED");
    let order = Entity::new(EntityKind::Order, &Params::new().with("id", 5)).unwrap();

    let err = order.archive(&ctx).unwrap_err();
    assert!(matches!(err, Error::Remote(_)));
}

#[test]
fn unsupported_operations_make_no_remote_call() {
    let (local, ctx) = live();
    let lica = Entity::new(EntityKind::Lica, &Params::new()).unwrap();
    assert!(matches!(
        lica.query(&ctx).unwrap_err(),
        Error::Unsupported { operation: "query", .. }
    ));

    let line_item = Entity::new(EntityKind::LineItem, &Params::new().with("id", 1)).unwrap();
    assert!(matches!(
        line_item.archive(&ctx).unwrap_err(),
        Error::Unsupported { operation: "archive", .. }
    ));
    assert_eq!(local.call_count(), 0);
}
