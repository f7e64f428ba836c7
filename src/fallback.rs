//! Deterministic fallback workflow.
//!
//! Used whenever the model path fails. The document is a fixed
//! trigger → process → output chain shaped by the platform profile and
//! always satisfies the structure validator for that platform.

use std::collections::BTreeMap;

use serde_json::{Map, Value, json};

use crate::{
    WorkflowRequest,
    model::{ConnectionEdge, MAIN_CHANNEL, NodeConnections, NodeModel, WorkflowDocument},
};

pub const TRIGGER_NODE: &str = "Trigger";
pub const PROCESS_NODE: &str = "AI Processing";
pub const OUTPUT_NODE: &str = "Output";

const NAME_PREFIX_CHARS: usize = 30;
const OUTPUT_METHOD: &str = "POST";
const OUTPUT_URL: &str = "https://api.example.com/webhook";
const INSTANCE_ID: &str = "ai-generated";
const VERSION_ID: &str = "1.0.0";

/// Build the fallback workflow for `request`.
pub fn generate_fallback(request: &WorkflowRequest) -> WorkflowDocument {
    let profile = request.platform.profile();
    let types = profile.node_types;
    let description = &request.description;

    let nodes = vec![
        node("trigger", TRIGGER_NODE, types.trigger, json!({ "description": description })),
        node("process", PROCESS_NODE, types.process, json!({ "code": format!("// Process: {}", description) })),
        node("output", OUTPUT_NODE, types.output, json!({ "method": OUTPUT_METHOD, "url": OUTPUT_URL })),
    ];

    let mut connections = BTreeMap::new();
    connections.insert(TRIGGER_NODE.to_string(), main_chain(PROCESS_NODE));
    connections.insert(PROCESS_NODE.to_string(), main_chain(OUTPUT_NODE));

    let mut document = WorkflowDocument {
        name: workflow_name(description),
        nodes,
        connections,
        ..Default::default()
    };

    if profile.instance_metadata {
        let mut meta = Map::new();
        meta.insert("instanceId".to_string(), INSTANCE_ID.into());

        document.settings = Some(Map::new());
        document.meta = Some(meta);
        document.version_id = Some(VERSION_ID.to_string());
    }

    document
}

fn workflow_name(description: &str) -> String {
    let prefix: String = description.chars().take(NAME_PREFIX_CHARS).collect();
    format!("AI Generated Workflow: {}...", prefix)
}

fn node(
    id: &str,
    name: &str,
    uses: &str,
    parameters: Value,
) -> NodeModel {
    let parameters = match parameters {
        Value::Object(map) => map,
        _ => Map::new(),
    };
    NodeModel {
        id: id.to_string(),
        name: name.to_string(),
        uses: uses.to_string(),
        parameters,
    }
}

fn main_chain(target: &str) -> NodeConnections {
    let mut outputs = NodeConnections::new();
    outputs.insert(MAIN_CHANNEL.to_string(), vec![vec![ConnectionEdge::main(target)]]);
    outputs
}
