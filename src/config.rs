use std::{fs, path::Path, path::PathBuf};

use serde::Deserialize;

use crate::{GenflowError, Result};

pub const DEFAULT_MODEL: &str = "gemini-pro";
pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";
pub const DEFAULT_API_KEY_ENV: &str = "GOOGLE_API_KEY";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// model config
    pub model: ModelConfig,
    /// directory the generated workflow file is written to, defaults to the working directory
    pub output_dir: PathBuf,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    /// model name, e.g. "gemini-pro"
    pub name: String,
    /// base url of the models endpoint
    pub api_base: String,
    /// environment variable holding the api key
    pub api_key_env: String,
    /// sampling temperature, model default when unset
    pub temperature: Option<f32>,
    /// max output tokens, model default when unset
    pub max_output_tokens: Option<u32>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            model: ModelConfig::default(),
            output_dir: PathBuf::from("."),
        }
    }
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_MODEL.to_string(),
            api_base: DEFAULT_API_BASE.to_string(),
            api_key_env: DEFAULT_API_KEY_ENV.to_string(),
            temperature: None,
            max_output_tokens: None,
        }
    }
}

impl Config {
    pub fn create<T: AsRef<Path>>(path: T) -> Result<Self> {
        let data = fs::read_to_string(path.as_ref()).map_err(|err| GenflowError::Config(format!("failed to load config file {:?}: {}", path.as_ref(), err)))?;

        Self::load_from_str(data.as_str())
    }

    pub fn load_from_str(toml_str: &str) -> Result<Self> {
        let config = toml::from_str::<Config>(toml_str)?;
        Ok(config)
    }
}
