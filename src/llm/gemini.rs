//! Google Gemini client.
//!
//! The API key is held as a [`SecretString`] and sent in the
//! `x-goog-api-key` header, so it never shows up in urls or logs.

use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::{GenflowError, Result, config::ModelConfig, llm::ModelClient};

const API_KEY_HEADER: &str = "x-goog-api-key";

pub struct GeminiClient {
    client: Client,
    api_key: SecretString,
    api_base: String,
    model: String,
    temperature: Option<f32>,
    max_output_tokens: Option<u32>,
}

impl GeminiClient {
    pub fn new(
        config: &ModelConfig,
        api_key: SecretString,
    ) -> Self {
        Self {
            client: Client::new(),
            api_key,
            api_base: config.api_base.trim_end_matches('/').to_string(),
            model: config.name.clone(),
            temperature: config.temperature,
            max_output_tokens: config.max_output_tokens,
        }
    }

    fn api_url(&self) -> String {
        format!("{}/{}:generateContent", self.api_base, self.model)
    }

    fn build_request(
        &self,
        prompt: &str,
    ) -> GeminiRequest {
        let generation_config = if self.temperature.is_some() || self.max_output_tokens.is_some() {
            Some(GeminiGenerationConfig {
                temperature: self.temperature,
                max_output_tokens: self.max_output_tokens,
            })
        } else {
            None
        };

        GeminiRequest {
            contents: vec![GeminiContent {
                role: Some("user".to_string()),
                parts: vec![GeminiPart {
                    text: prompt.to_string(),
                }],
            }],
            generation_config,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GeminiRequest {
    contents: Vec<GeminiContent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GeminiGenerationConfig>,
}

#[derive(Serialize, Deserialize)]
struct GeminiContent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    #[serde(default)]
    parts: Vec<GeminiPart>,
}

#[derive(Serialize, Deserialize)]
struct GeminiPart {
    #[serde(default)]
    text: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GeminiGenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_output_tokens: Option<u32>,
}

#[derive(Deserialize)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<GeminiCandidate>,
}

#[derive(Deserialize)]
struct GeminiCandidate {
    content: Option<GeminiContent>,
}

#[derive(Deserialize)]
struct GeminiError {
    error: GeminiErrorDetail,
}

#[derive(Deserialize)]
struct GeminiErrorDetail {
    message: String,
}

impl GeminiResponse {
    /// Concatenated text of the first candidate.
    fn text(&self) -> Result<String> {
        let content = self
            .candidates
            .first()
            .and_then(|c| c.content.as_ref())
            .ok_or(GenflowError::Generation("model returned no candidates".to_string()))?;

        let text = content.parts.iter().map(|p| p.text.as_str()).collect::<String>();
        if text.trim().is_empty() {
            return Err(GenflowError::Generation("model returned an empty response".to_string()));
        }
        Ok(text)
    }
}

#[async_trait]
impl ModelClient for GeminiClient {
    fn model(&self) -> &str {
        &self.model
    }

    #[instrument(skip(self, prompt), fields(provider = "gemini", model = %self.model))]
    async fn generate(
        &self,
        prompt: &str,
    ) -> Result<String> {
        debug!(prompt_len = prompt.len(), "sending generateContent request");

        let response = self
            .client
            .post(self.api_url())
            .header(API_KEY_HEADER, self.api_key.expose_secret())
            .json(&self.build_request(prompt))
            .send()
            .await
            .map_err(|err| GenflowError::Generation(format!("Http error: {}", err)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<GeminiError>(&body).map(|e| e.error.message).unwrap_or(body);
            return Err(GenflowError::Generation(format!("gemini api error ({}): {}", status.as_u16(), message)));
        }

        let api_response: GeminiResponse = response.json().await?;
        let text = api_response.text()?;

        debug!(response_len = text.len(), "received model response");
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn client(config: ModelConfig) -> GeminiClient {
        GeminiClient::new(&config, SecretString::from("test-key".to_string()))
    }

    #[test]
    fn test_api_url() {
        let config = ModelConfig {
            api_base: "https://example.test/v1beta/models/".to_string(),
            ..Default::default()
        };
        assert_eq!(client(config).api_url(), "https://example.test/v1beta/models/gemini-pro:generateContent");
    }

    #[test]
    fn test_request_body_without_generation_config() {
        let request = client(ModelConfig::default()).build_request("hello");
        let value = serde_json::to_value(&request).unwrap();

        assert_eq!(value, json!({"contents": [{"role": "user", "parts": [{"text": "hello"}]}]}));
    }

    #[test]
    fn test_request_body_with_generation_config() {
        let config = ModelConfig {
            temperature: Some(0.5),
            max_output_tokens: Some(2048),
            ..Default::default()
        };
        let value = serde_json::to_value(client(config).build_request("hello")).unwrap();

        assert_eq!(value["generationConfig"], json!({"temperature": 0.5, "maxOutputTokens": 2048}));
    }

    #[test]
    fn test_response_text_joins_parts() {
        let response: GeminiResponse = serde_json::from_value(json!({
            "candidates": [{"content": {"role": "model", "parts": [{"text": "```json\n{"}, {"text": "}\n```"}]}, "finishReason": "STOP"}]
        }))
        .unwrap();

        assert_eq!(response.text().unwrap(), "```json\n{}\n```");
    }

    #[test]
    fn test_response_without_candidates() {
        let response: GeminiResponse = serde_json::from_value(json!({"promptFeedback": {"blockReason": "SAFETY"}})).unwrap();
        assert!(matches!(response.text(), Err(GenflowError::Generation(_))));
    }

    #[test]
    fn test_response_blank_text() {
        let response: GeminiResponse = serde_json::from_value(json!({"candidates": [{"content": {"parts": [{"text": "  "}]}}]})).unwrap();
        assert!(matches!(response.text(), Err(GenflowError::Generation(_))));
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_generation_error() {
        let config = ModelConfig {
            api_base: "http://127.0.0.1:9".to_string(),
            ..Default::default()
        };
        let err = client(config).generate("hello").await.unwrap_err();
        assert!(matches!(err, GenflowError::Generation(_)));
    }
}
