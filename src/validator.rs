//! Shallow structural validation of workflow documents.
//!
//! Only the top level is checked: required keys per platform, `nodes` is an
//! array and `connections` is an object. Node and edge contents are not.

use serde_json::{Value, json};

use crate::{Platform, Result};

/// JSON schema for a workflow document targeting `platform`.
pub fn schema(platform: &Platform) -> Value {
    json!({
        "type": "object",
        "required": platform.profile().required_keys,
        "properties": {
            "nodes": { "type": "array" },
            "connections": { "type": "object" }
        }
    })
}

/// Check `workflow` against the platform schema, reporting the first violation.
pub fn check_workflow(
    workflow: &Value,
    platform: &Platform,
) -> Result<()> {
    jsonschema::validate(&schema(platform), workflow)?;
    Ok(())
}

pub fn validate_workflow(
    workflow: &Value,
    platform: &Platform,
) -> bool {
    check_workflow(workflow, platform).is_ok()
}
