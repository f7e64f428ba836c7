use crate::WorkflowRequest;

/// Build the generation prompt for a request.
pub fn build_prompt(request: &WorkflowRequest) -> String {
    let platform = request.platform.as_str();
    let description = &request.description;
    let complexity = &request.complexity;

    format!(
        r#"
You are an expert workflow automation engineer. Generate a {platform} workflow based on this description:

"{description}"

Requirements:
- Platform: {platform}
- Complexity: {complexity}
- Include proper node connections
- Use realistic API endpoints and configurations
- Follow {platform} best practices

Return a JSON object with the complete workflow structure for {platform}.
Include all necessary nodes, connections, and configurations.

For {platform} workflows, structure your response as:
{{
  "name": "Workflow Name",
  "nodes": [...],
  "connections": {{...}},
  "settings": {{...}}
}}

Make sure the workflow is functional and includes proper error handling.
"#
    )
}
