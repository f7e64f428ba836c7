mod gemini;

use async_trait::async_trait;

use crate::Result;

pub use gemini::GeminiClient;

/// Text completion backend used by the generator.
#[async_trait]
pub trait ModelClient: Send + Sync {
    /// Returns the model identifier, for logging.
    fn model(&self) -> &str;

    /// Sends `prompt` to the model and returns its raw text response.
    ///
    /// # Errors
    ///
    /// Returns [`crate::GenflowError::Generation`] on network, auth or quota
    /// failures and when the model produced no text.
    async fn generate(
        &self,
        prompt: &str,
    ) -> Result<String>;
}
