use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{
    GenflowError, Result,
    model::{NodeConnections, NodeModel},
};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowDocument {
    pub name: String,
    pub nodes: Vec<NodeModel>,
    /// outgoing connections keyed by source node name
    pub connections: BTreeMap<String, NodeConnections>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub settings: Option<serde_json::Map<String, serde_json::Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<serde_json::Map<String, serde_json::Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version_id: Option<String>,
}

impl WorkflowDocument {
    pub fn to_value(&self) -> Result<serde_json::Value> {
        Ok(serde_json::to_value(self)?)
    }
}

/// Result of one generation run.
#[derive(Debug, Clone, PartialEq)]
pub enum WorkflowOutcome {
    /// Validated model output, returned unchanged.
    Generated(serde_json::Value),
    /// Deterministic fallback and the failure that triggered it.
    Fallback {
        document: WorkflowDocument,
        reason: GenflowError,
    },
}

impl WorkflowOutcome {
    pub fn is_fallback(&self) -> bool {
        matches!(self, WorkflowOutcome::Fallback { .. })
    }

    pub fn to_value(&self) -> Result<serde_json::Value> {
        match self {
            WorkflowOutcome::Generated(value) => Ok(value.clone()),
            WorkflowOutcome::Fallback { document, .. } => document.to_value(),
        }
    }
}
