use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NodeModel {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub uses: String,
    pub parameters: serde_json::Map<String, serde_json::Value>,
}
