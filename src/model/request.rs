use serde::{Deserialize, Serialize};

use crate::Platform;

pub const DEFAULT_COMPLEXITY: &str = "medium";

/// A single generation request. Empty strings are accepted as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkflowRequest {
    pub description: String,
    pub platform: Platform,
    pub complexity: String,
}

impl WorkflowRequest {
    pub fn new<D, C>(
        description: D,
        platform: Platform,
        complexity: C,
    ) -> Self
    where
        D: Into<String>,
        C: Into<String>,
    {
        Self {
            description: description.into(),
            platform,
            complexity: complexity.into(),
        }
    }
}
