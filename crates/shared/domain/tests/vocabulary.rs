use ghub_domain::action::Action;
use ghub_domain::priority::Priority;

#[test]
fn priorities_are_ordered_by_urgency() {
    assert!(Priority::Low < Priority::Medium);
    assert!(Priority::Medium < Priority::High);
    assert!(Priority::High < Priority::Critical);
    assert_eq!(Priority::default(), Priority::Medium);
}

#[test]
fn priority_labels_are_case_insensitive() {
    assert_eq!(Priority::from_label("critical"), Some(Priority::Critical));
    assert_eq!(Priority::from_label(" High "), Some(Priority::High));
    assert_eq!(Priority::from_label("Urgent"), None);
    assert_eq!(Priority::High.to_string(), "High");
}

#[test]
fn actions_parse_from_names() {
    assert_eq!(Action::from("view"), Action::VIEW);
    assert_eq!(Action::from("create"), Action::CREATE);
    assert_eq!(Action::from("*"), Action::ALL);
    assert!(Action::from("delete").is_empty());
}

#[test]
fn actions_serialize_as_bits() {
    let raw = serde_json::to_value(Action::VIEW | Action::UPDATE).expect("serialize");
    assert_eq!(raw, serde_json::json!(5));

    let back: Action = serde_json::from_value(raw).expect("deserialize");
    assert!(back.contains(Action::UPDATE));
}
