use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

pub const MAIN_CHANNEL: &str = "main";

/// Outgoing connections of one node, keyed by output channel.
///
/// Each channel holds one edge list per output slot.
pub type NodeConnections = BTreeMap<String, Vec<Vec<ConnectionEdge>>>;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionEdge {
    /// name of the target node
    pub node: String,
    #[serde(rename = "type")]
    pub channel: String,
    /// input index on the target node
    pub index: u32,
}

impl ConnectionEdge {
    pub fn main<T: Into<String>>(node: T) -> Self {
        Self {
            node: node.into(),
            channel: MAIN_CHANNEL.to_string(),
            index: 0,
        }
    }
}
