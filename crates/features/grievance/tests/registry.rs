pub mod fixtures;

use fixtures::*;
use ghub_domain::constants::MODULE_NAME;
use ghub_grievance::{Duration, GrievanceError, GrievanceRegistry, default_payload};
use ghub_kernel::store::{InMemoryStore, JsonFileStore};
use serde_json::{Value, json};
use std::sync::Arc;
use std::thread;

fn ten_entries(bad_at: Option<usize>) -> Value {
    let types: Vec<Value> = (0..10)
        .map(|i| {
            let token = if Some(i) == bad_at { "3,24".to_owned() } else { format!("{i},0") };
            json!({ "name": format!("cat_{i}"), "resolution_times": token })
        })
        .collect();
    json!({ "resolution_times": "5,0", "grievance_types": types })
}

#[test]
fn test_load_installs_and_bumps_generation() {
    let registry = GrievanceRegistry::new();
    assert_eq!(registry.generation(), 0);
    assert_eq!(registry.snapshot().category_count(), 0);

    let first = registry.load(&resolution_payload()).unwrap();
    assert_eq!(first.generation(), 1);
    assert_eq!(registry.resolve("urgent_complaint"), Duration::new(1, 0).unwrap());

    registry.load(&access_payload()).unwrap();
    assert_eq!(registry.generation(), 2);
    // Readers holding the old snapshot keep a consistent view.
    assert_eq!(first.resolve("urgent_complaint"), Duration::new(1, 0).unwrap());
    assert!(registry.snapshot().category("urgent_complaint").is_none());
}

#[test]
fn test_one_malformed_entry_installs_nothing() {
    let registry = GrievanceRegistry::new();
    registry.load(&resolution_payload()).unwrap();
    let before = registry.snapshot();

    let err = registry.load(&ten_entries(Some(6))).unwrap_err();
    assert!(matches!(err, GrievanceError::ConfigValidation { .. }));

    let after = registry.snapshot();
    assert!(Arc::ptr_eq(&before, &after));
    assert_eq!(after.generation(), 1);
    assert!(after.category("cat_0").is_none());

    registry.load(&ten_entries(None)).unwrap();
    assert_eq!(registry.snapshot().category_count(), 10);
    assert_eq!(registry.generation(), 2);
}

#[test]
fn test_load_from_store_falls_back_to_defaults() {
    let registry = GrievanceRegistry::new();
    let store = InMemoryStore::new();

    let config = registry.load_from_store(&store, MODULE_NAME).unwrap();
    assert_eq!(*config, ghub_grievance::GrievanceConfig::from_payload(&default_payload()).unwrap());

    store.insert(MODULE_NAME, resolution_payload());
    registry.load_from_store(&store, MODULE_NAME).unwrap();
    assert_eq!(registry.resolve("feedback"), Duration::new(7, 0).unwrap());
}

#[test]
fn test_store_errors_keep_active_config() {
    let registry = GrievanceRegistry::new();
    registry.load(&resolution_payload()).unwrap();

    let err = registry.load_from_store(&InMemoryStore::new(), "../escape").unwrap_err();
    assert!(matches!(err, GrievanceError::Store { context: Some(_), .. }));
    assert_eq!(registry.generation(), 1);
}

#[test]
fn test_init_reads_module_document_from_directory() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join(format!("{MODULE_NAME}.json")),
        serde_json::to_vec(&resolution_payload()).unwrap(),
    )
    .unwrap();

    let registry = ghub_grievance::init(&JsonFileStore::new(dir.path())).unwrap();
    assert_eq!(registry.generation(), 1);
    assert_eq!(registry.resolve("general_complaint"), Duration::new(3, 0).unwrap());
}

#[test]
fn test_concurrent_readers_never_see_partial_trees() {
    let registry = Arc::new(GrievanceRegistry::new());
    registry.load(&ten_entries(None)).unwrap();

    let readers: Vec<_> = (0..4)
        .map(|_| {
            let registry = Arc::clone(&registry);
            thread::spawn(move || {
                for _ in 0..500 {
                    let snapshot = registry.snapshot();
                    let count = snapshot.category_count();
                    assert!(count == 10 || count == 4, "observed {count} categories");
                }
            })
        })
        .collect();

    for i in 0..50 {
        let payload = if i % 2 == 0 { resolution_payload() } else { ten_entries(None) };
        registry.load(&payload).unwrap();
        // Rejected reloads interleave without effect.
        assert!(registry.load(&ten_entries(Some(3))).is_err());
    }

    for reader in readers {
        reader.join().unwrap();
    }
    assert_eq!(registry.generation(), 51);
}
