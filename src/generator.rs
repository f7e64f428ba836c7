//! Generation pipeline.
//!
//! `prompt → model → parse → validate`, with any failure along the way
//! diverted once to the deterministic fallback. There is no retry.

use std::sync::Arc;

use serde_json::Value;
use tracing::{debug, info, warn};

use crate::{
    Result, WorkflowOutcome, WorkflowRequest, fallback::generate_fallback, llm::ModelClient, parser::parse_response, prompt::build_prompt,
    validator::check_workflow,
};

/// Runs one request through the model and falls back when needed.
#[derive(Clone)]
pub struct WorkflowGenerator {
    client: Arc<dyn ModelClient>,
}

impl WorkflowGenerator {
    pub fn new(client: Arc<dyn ModelClient>) -> Self {
        Self {
            client,
        }
    }

    pub fn model(&self) -> &str {
        self.client.model()
    }

    /// Generate a workflow for `request`.
    ///
    /// Never fails: generation, parse and validation errors produce
    /// [`WorkflowOutcome::Fallback`] carrying the error as its reason.
    pub async fn generate(
        &self,
        request: &WorkflowRequest,
    ) -> WorkflowOutcome {
        match self.try_generate(request).await {
            Ok(workflow) => {
                info!(platform = %request.platform, "model workflow accepted");
                WorkflowOutcome::Generated(workflow)
            }
            Err(reason) => {
                warn!(platform = %request.platform, error = %reason, "model workflow rejected, using fallback");
                WorkflowOutcome::Fallback {
                    document: generate_fallback(request),
                    reason,
                }
            }
        }
    }

    async fn try_generate(
        &self,
        request: &WorkflowRequest,
    ) -> Result<Value> {
        let prompt = build_prompt(request);
        debug!(model = self.client.model(), "calling model");

        let text = self.client.generate(&prompt).await?;
        let workflow = parse_response(&text)?;
        check_workflow(&workflow, &request.platform)?;

        Ok(workflow)
    }
}
