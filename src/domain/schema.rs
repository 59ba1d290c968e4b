//! 리소스 레코드의 JSON Schema.

use serde_json::{Value, json};

use crate::domain::record::{MAX_UPDATE_FREQUENCY, MIN_UPDATE_FREQUENCY};

/// `schema` 명령이 출력하는 리소스 스키마.
pub fn resource_schema() -> Value {
    json!({
        "$schema": "https://json-schema.org/draft/2020-12/schema",
        "title": "TSToy Resource",
        "type": "object",
        "required": ["scope"],
        "properties": {
            "scope": {
                "title": "Target configuration scope",
                "description": "Defines which of TSToy's config files to manage.",
                "type": "string",
                "enum": ["machine", "user"]
            },
            "ensure": {
                "title": "Ensure configuration file existence",
                "description": "Defines whether the config file should exist.",
                "type": "string",
                "enum": ["present", "absent"],
                "default": "present"
            },
            "updateAutomatically": {
                "title": "Should update automatically",
                "description": "Indicates whether TSToy should check for updates when it starts.",
                "type": "boolean"
            },
            "updateFrequency": {
                "title": "Update check frequency",
                "description": "Indicates how many days TSToy should wait before checking for updates.",
                "type": "integer",
                "minimum": MIN_UPDATE_FREQUENCY,
                "maximum": MAX_UPDATE_FREQUENCY
            }
        }
    })
}
