//! Config file to operation context

use std::sync::Arc;

use tempfile::TempDir;

use adops::{Entity, EntityKind, LocalAdManager, OperationContext, OpsConfig, Params};
use adops_engine::CONFIG_FILE_NAME;

use crate::common::named;

fn context_from(toml: &str, dry_run_flag: Option<bool>) -> adops_core::Result<OperationContext> {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(CONFIG_FILE_NAME);
    std::fs::write(&path, toml).unwrap();
    let mut config = OpsConfig::from_file(&path)?;
    if let Some(flag) = dry_run_flag {
        config = config.with_dry_run(flag);
    }
    OperationContext::from_config(Arc::new(LocalAdManager::new()), &config)
}

#[test]
fn configured_prefix_is_used_for_simulated_ids() {
    let ctx = context_from("dry_run = true\n[dry_run_ids]\nid_prefix = \"4242\"\n", None).unwrap();
    let key = Entity::new(EntityKind::TargetingKey, &Params::new()).unwrap();
    let out = key.create(&ctx, &named(&["geo"])).unwrap();
    let id = out[0].id().unwrap().to_string();
    assert!(id.starts_with("4242"));
    assert_eq!(id.len(), 18);
}

#[test]
fn command_line_flag_overrides_file() {
    let ctx = context_from("dry_run = false\n", Some(true)).unwrap();
    assert!(ctx.mode().is_dry_run());

    let ctx = context_from("dry_run = true\n", Some(false)).unwrap();
    assert!(!ctx.mode().is_dry_run());
}

#[test]
fn invalid_prefix_fails_before_any_call() {
    let err = context_from("[dry_run_ids]\nid_prefix = \"1234567\"\n", None).unwrap_err();
    assert!(matches!(err, adops_core::Error::Config { .. }));
}
