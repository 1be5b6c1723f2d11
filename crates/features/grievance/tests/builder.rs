pub mod fixtures;

use fixtures::*;
use ghub_grievance::{ConfigNode, GrievanceConfig, GrievanceError, NodeKind, PermissionSet};
use serde_json::json;

#[test]
fn test_inheritance_is_transitive_through_three_levels() {
    let config = build(&access_payload());

    let root = config.category("benefits").unwrap();
    let grandchild = config.category("late_payment").unwrap();

    assert_eq!(grandchild.path(), "benefits|payment|late_payment");
    assert_eq!(grandchild.permissions(), root.permissions());
    assert_eq!(config.category("payment").unwrap().permissions(), root.permissions());
    assert_eq!(grandchild.priority(), Some("High"));
    assert_eq!(grandchild.default_flags(), ["SENSITIVE"]);
}

#[test]
fn test_override_never_unions_parent_codes() {
    let config = build(&access_payload());

    let overridden = config.category("wrong_amount").unwrap();
    assert_eq!(overridden.permissions(), &PermissionSet::restricted(["127003"]));
    assert!(!overridden.permissions().contains("127001"));
    assert!(!overridden.permissions().contains("127002"));
    assert_eq!(overridden.priority(), Some("Critical"));
}

#[test]
fn test_resolution_time_inherits_and_overrides() {
    let config = build(&resolution_payload());

    let general = config.category("general_complaint").unwrap();
    let urgent = config.category("urgent_complaint").unwrap();
    assert_eq!(general.resolution_time().map(|d| d.to_string()).as_deref(), Some("3,0"));
    assert_eq!(urgent.resolution_time().map(|d| d.to_string()).as_deref(), Some("1,0"));
    assert_eq!(config.category("feedback").unwrap().resolution_time(), None);
}

#[test]
fn test_simple_entries_are_unrestricted_at_any_level() {
    let config = build(&json!({
        "grievance_types": [
            { "name": "parent", "permissions": ["127001"], "resolution_times": "2,0",
              "priority": "High", "children": ["plain_child"] }
        ]
    }));

    let child = config.category("parent|plain_child").unwrap();
    assert!(child.permissions().is_unrestricted());
    assert_eq!(child.resolution_time(), None);
    assert_eq!(child.priority(), None);
    assert!(child.default_flags().is_empty());
}

#[test]
fn test_flags_are_flat_and_normalized() {
    let config = build(&access_payload());

    let names: Vec<_> = config.flags().iter().map(ConfigNode::name).collect();
    assert_eq!(names, ["NORMAL", "SENSITIVE", "SPECIAL", "LOCKED"]);
    assert!(config.flags().iter().all(|f| f.kind() == NodeKind::Flag && f.is_leaf()));

    // Integer codes are normalized to strings.
    assert!(config.flag("SPECIAL").unwrap().permissions().contains("127005"));

    // `[]` is restricted, not unrestricted.
    let locked = config.flag("LOCKED").unwrap().permissions();
    assert!(!locked.is_unrestricted());
    assert!(locked.is_empty());
}

#[test]
fn test_rebuild_is_idempotent() {
    let payload = access_payload();
    assert_eq!(build(&payload), build(&payload));
}

#[test]
fn test_unknown_top_level_keys_are_ignored() {
    let config = build(&json!({
        "grievance_channels": ["phone", "email"],
        "grievance_types": ["a"]
    }));
    assert_eq!(config.category_count(), 1);
}

#[test]
fn test_empty_payload_builds_empty_config() {
    let config = build(&json!({}));
    assert_eq!(config, GrievanceConfig::default());
    assert_eq!(config.resolution().global, None);
}

#[test]
fn test_malformed_entries_report_their_path() {
    let cases = [
        (
            json!({ "grievance_types": [{ "name": "a", "children": [{ "name": "b", "resolution_times": "1;0" }] }] }),
            vec!["grievance_types", "a", "b"],
        ),
        (json!({ "grievance_types": ["ok", 42] }), vec!["grievance_types", "#1"]),
        (json!({ "grievance_types": [{ "name": "" }] }), vec!["grievance_types", ""]),
        (json!({ "grievance_types": ["a|b"] }), vec!["grievance_types", "a|b"]),
        (json!({ "grievance_types": ["dup", { "name": "dup" }] }), vec!["grievance_types", "dup"]),
        (json!({ "grievance_flags": [{ "name": "F", "children": ["x"] }] }), vec!["grievance_flags", "F"]),
        (
            json!({ "grievance_types": [{ "name": "p", "permissions": { "code": 1 } }] }),
            vec!["grievance_types", "p"],
        ),
        (json!({ "resolution_times": "100,0" }), vec!["resolution_times"]),
        (json!({ "default_resolution": { "x": "1,25" } }), vec!["default_resolution", "x"]),
        (json!({ "default_resolution": { "x": 5 } }), vec!["default_resolution", "x"]),
        (json!({ "default_resolution": ["x"] }), vec!["default_resolution"]),
        (json!({ "grievance_types": "a" }), vec!["grievance_types"]),
        (json!({ "grievance_flags": { "name": "F" } }), vec!["grievance_flags"]),
        (json!({ "resolution_times": 5 }), vec!["resolution_times"]),
    ];

    for (payload, expected) in cases {
        let err = GrievanceConfig::from_payload(&payload).unwrap_err();
        let GrievanceError::ConfigValidation { path, .. } = &err else {
            panic!("expected a validation error for {payload}, got {err}");
        };
        assert_eq!(path.segments(), expected.as_slice(), "{payload}");
    }
}

#[test]
fn test_duplicate_names_at_different_positions_are_legal() {
    let config = build(&json!({
        "grievance_types": [
            { "name": "a", "children": ["shared"] },
            { "name": "b", "children": ["shared"] }
        ]
    }));

    assert_eq!(config.category("shared").unwrap().path(), "a|shared");
    assert_eq!(config.category("b|shared").unwrap().path(), "b|shared");
}

#[test]
fn test_empty_legacy_value_takes_global() {
    let config = build(&json!({
        "resolution_times": "6,0",
        "default_resolution": { "x": "", "y": null }
    }));

    let legacy = &config.resolution().legacy;
    assert_eq!(legacy["x"].to_string(), "6,0");
    assert_eq!(legacy["y"].to_string(), "6,0");
}

#[test]
fn test_nodes_serialize_for_operators() {
    let config = build(&access_payload());
    let value = serde_json::to_value(config.category("enrolment").unwrap()).unwrap();

    assert_eq!(value["kind"], "category");
    assert_eq!(value["path"], "benefits|enrolment");
    assert_eq!(value["permissions"], json!(["127009"]));
    assert_eq!(value["priority"], "High");
}
