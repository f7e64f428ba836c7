//! Rendering and persistence of the final workflow.

use std::{
    fs,
    path::{Path, PathBuf},
};

use serde_json::Value;

use crate::{Result, WorkflowRequest};

/// File name for a request: `ai-workflow-{platform}-{complexity}.json`.
pub fn file_name(request: &WorkflowRequest) -> String {
    format!("ai-workflow-{}-{}.json", request.platform, request.complexity)
}

/// Pretty-print with two-space indentation.
pub fn render(workflow: &Value) -> Result<String> {
    Ok(serde_json::to_string_pretty(workflow)?)
}

/// Write `workflow` into `dir`, replacing any previous file, and return its path.
pub fn save<P: AsRef<Path>>(
    dir: P,
    request: &WorkflowRequest,
    workflow: &Value,
) -> Result<PathBuf> {
    let path = dir.as_ref().join(file_name(request));
    fs::write(&path, render(workflow)?)?;
    Ok(path)
}
