use ghub_kernel::store::{JsonFileStore, ModuleConfigStore, StoreError};
use serde_json::json;
use std::fs;
use tempfile::TempDir;

#[test]
fn missing_document_is_none() {
    let temp = TempDir::new().unwrap();
    let store = JsonFileStore::new(temp.path());

    assert!(store.get("grievance_social_protection").unwrap().is_none());
}

#[test]
fn stored_document_is_parsed() {
    let temp = TempDir::new().unwrap();
    let doc = json!({ "resolution_times": "4,12", "grievance_types": ["complaint"] });
    fs::write(temp.path().join("grievance_social_protection.json"), doc.to_string()).unwrap();

    let store = JsonFileStore::new(temp.path());
    assert_eq!(store.get("grievance_social_protection").unwrap(), Some(doc));
}

#[test]
fn malformed_document_reports_json_error() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("broken.json"), "{ not json").unwrap();

    let store = JsonFileStore::new(temp.path());
    let err = store.get("broken").expect_err("malformed document");
    assert!(matches!(err, StoreError::Json { context: Some(_), .. }));
}

#[test]
fn traversal_keys_are_rejected() {
    let temp = TempDir::new().unwrap();
    let store = JsonFileStore::new(temp.path());

    assert!(matches!(store.get("../secrets"), Err(StoreError::InvalidKey { .. })));
    assert!(store.document_path("nested/module").is_err());
}

#[test]
fn get_or_default_prefers_stored_document() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("grievance.json"), r#"{"resolution_times":"2,0"}"#).unwrap();

    let store = JsonFileStore::new(temp.path());
    let fallback = json!({ "resolution_times": "5,0" });

    assert_eq!(store.get_or_default("grievance", &fallback).unwrap()["resolution_times"], "2,0");
    assert_eq!(store.get_or_default("absent", &fallback).unwrap(), fallback);
}
