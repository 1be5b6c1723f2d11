#![allow(dead_code)]

use ghub_grievance::GrievanceConfig;
use ghub_kernel::security::Principal;
use serde_json::{Value, json};

/// Category tree used by the resolution-chain tests.
#[must_use]
pub fn resolution_payload() -> Value {
    json!({
        "resolution_times": "5,0",
        "default_resolution": { "feedback": "7,0" },
        "grievance_types": [
            {
                "name": "complaint",
                "resolution_times": "3,0",
                "children": [
                    { "name": "urgent_complaint", "resolution_times": "1,0" },
                    { "name": "general_complaint" }
                ]
            },
            "feedback"
        ]
    })
}

/// Three-level tree mixing inherited and overridden permissions.
#[must_use]
pub fn access_payload() -> Value {
    json!({
        "grievance_types": [
            {
                "name": "benefits",
                "permissions": ["127001", "127002"],
                "priority": "High",
                "default_flags": ["SENSITIVE"],
                "children": [
                    {
                        "name": "payment",
                        "children": [
                            { "name": "late_payment" },
                            { "name": "wrong_amount", "permissions": "127003", "priority": "Critical" }
                        ]
                    },
                    { "name": "enrolment", "permissions": ["127009"] }
                ]
            },
            {
                "name": "restricted_root",
                "permissions": "900001",
                "children": [
                    {
                        "name": "middle",
                        "children": [
                            { "name": "leaf", "permissions": ["127002"] }
                        ]
                    }
                ]
            },
            {
                "name": "sealed",
                "permissions": "900002",
                "children": [ { "name": "sealed_child" } ]
            },
            "general"
        ],
        "grievance_flags": [
            "NORMAL",
            { "name": "SENSITIVE", "permissions": ["127002"], "priority": "High" },
            { "name": "SPECIAL", "permissions": [127_005], "priority": "Critical" },
            { "name": "LOCKED", "permissions": [] }
        ]
    })
}

/// Builds `payload`, panicking on validation errors.
#[must_use]
pub fn build(payload: &Value) -> GrievanceConfig {
    GrievanceConfig::from_payload(payload).expect("payload should build")
}

pub fn officer<const N: usize>(codes: [&str; N]) -> Principal {
    Principal::new("officer", codes)
}
