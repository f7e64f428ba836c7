use std::sync::Arc;

use secrecy::SecretString;

use crate::{
    Config, GenflowError, Result, WorkflowGenerator,
    llm::{GeminiClient, ModelClient},
};

#[derive(Default)]
pub struct GeneratorBuilder {
    config: Config,
    api_key: Option<SecretString>,
    client: Option<Arc<dyn ModelClient>>,
}

impl GeneratorBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn config(
        mut self,
        config: Config,
    ) -> Self {
        self.config = config;
        self
    }

    pub fn api_key(
        mut self,
        api_key: SecretString,
    ) -> Self {
        self.api_key = Some(api_key);
        self
    }

    /// Use `client` instead of a Gemini client built from the config.
    pub fn client(
        mut self,
        client: Arc<dyn ModelClient>,
    ) -> Self {
        self.client = Some(client);
        self
    }

    pub fn build(self) -> Result<WorkflowGenerator> {
        let client = match self.client {
            Some(client) => client,
            None => {
                let api_key = self.api_key.ok_or_else(|| GenflowError::Config(format!("{} environment variable not set", self.config.model.api_key_env)))?;
                Arc::new(GeminiClient::new(&self.config.model, api_key))
            }
        };

        Ok(WorkflowGenerator::new(client))
    }
}

/// Read the api key from `var` through `lookup`.
///
/// Unset and empty values are both treated as missing. Whitespace is kept as-is.
pub fn resolve_api_key<F>(
    var: &str,
    lookup: F,
) -> Result<SecretString>
where
    F: FnOnce(&str) -> Option<String>,
{
    match lookup(var) {
        Some(key) if !key.is_empty() => Ok(SecretString::from(key)),
        _ => Err(GenflowError::Config(format!("{} environment variable not set", var))),
    }
}

#[cfg(test)]
mod tests {
    use secrecy::ExposeSecret;

    use super::*;
    use crate::config::ModelConfig;

    #[test]
    fn test_build_without_key_fails() {
        let err = GeneratorBuilder::new().build().err().unwrap();
        assert_eq!(err, GenflowError::Config("GOOGLE_API_KEY environment variable not set".to_string()));
    }

    #[test]
    fn test_build_with_key_uses_configured_model() {
        let config = Config {
            model: ModelConfig {
                name: "gemini-1.5-flash".to_string(),
                ..Default::default()
            },
            ..Default::default()
        };
        let generator = GeneratorBuilder::new().config(config).api_key(SecretString::from("k".to_string())).build().unwrap();
        assert_eq!(generator.model(), "gemini-1.5-flash");
    }

    #[test]
    fn test_resolve_api_key() {
        let key = resolve_api_key("GOOGLE_API_KEY", |_| Some("secret".to_string())).unwrap();
        assert_eq!(key.expose_secret(), "secret");
    }

    #[test]
    fn test_resolve_api_key_missing_or_empty() {
        assert!(matches!(resolve_api_key("GOOGLE_API_KEY", |_| None), Err(GenflowError::Config(_))));
        assert!(matches!(resolve_api_key("GOOGLE_API_KEY", |_| Some(String::new())), Err(GenflowError::Config(_))));
    }

    #[test]
    fn test_resolve_api_key_whitespace_not_missing() {
        let key = resolve_api_key("GOOGLE_API_KEY", |_| Some(" ".to_string())).unwrap();
        assert_eq!(key.expose_secret(), " ");
    }

    #[test]
    fn test_resolve_api_key_reads_named_var() {
        let key = resolve_api_key("GEMINI_KEY", |name| (name == "GEMINI_KEY").then(|| "abc".to_string())).unwrap();
        assert_eq!(key.expose_secret(), "abc");
    }
}
