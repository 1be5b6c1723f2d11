use ghub_domain::constants::{
    DEFAULT_RESOLUTION, DEFAULT_RESOLUTION_MAP, GRIEVANCE_FLAGS, GRIEVANCE_TYPES, RESOLUTION_TIMES,
};
use serde_json::{Value, json};

/// Payload used when the store holds no document for the grievance module.
#[must_use]
pub fn default_payload() -> Value {
    json!({
        RESOLUTION_TIMES: DEFAULT_RESOLUTION,
        DEFAULT_RESOLUTION_MAP: {
            "Default": "5,0",
            "violence_vbg": "2,0",
            "corruption": "3,0",
            "erreur_exclusion": "4,0",
            "erreur_inclusion": "4,0",
            "maladie_mentale": "3,0",
            "paiement": "5,0",
            "telephone": "5,0",
            "compte": "5,0",
            "information": "3,0",
        },
        GRIEVANCE_TYPES: [
            "Default",
            "violence_vbg",
            "corruption",
            "accident_negligence",
            "discrimination_ethnie_religion",
            "erreur_exclusion",
            "erreur_inclusion",
            "maladie_mentale",
            "paiement",
            "telephone",
            "compte",
            "information",
        ],
        GRIEVANCE_FLAGS: ["Default", "SENSITIVE", "SPECIAL"],
    })
}
