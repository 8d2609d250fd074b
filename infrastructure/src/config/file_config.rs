//! Configuration file structure (`quotecraft.toml`)

use quotecraft_application::config::GenerationParams;
use quotecraft_domain::Model;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

/// Errors raised while loading or resolving configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("no API key: set {0} or [provider].api_key")]
    MissingApiKey(String),

    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// Provider connection settings (`[provider]` section).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileProviderConfig {
    /// Environment variable name for the API key.
    pub api_key_env: String,
    /// Direct API key (not recommended — use the env var instead).
    pub api_key: Option<String>,
    /// Base URL of the OpenRouter-compatible API.
    pub base_url: String,
    /// Value for the HTTP-Referer attribution header.
    pub referer: String,
    /// Value for the X-Title attribution header.
    pub app_title: String,
}

impl Default for FileProviderConfig {
    fn default() -> Self {
        Self {
            api_key_env: "OPENROUTER_API_KEY".to_string(),
            api_key: None,
            base_url: "https://openrouter.ai".to_string(),
            referer: "https://github.com/quotecraft/quotecraft".to_string(),
            app_title: "Quotecraft".to_string(),
        }
    }
}

impl FileProviderConfig {
    /// Resolve the credential: an explicit `api_key` wins, otherwise the
    /// named environment variable. Resolved once at adapter construction.
    pub fn resolve_api_key(&self) -> Result<String, ConfigError> {
        if let Some(key) = &self.api_key
            && !key.trim().is_empty()
        {
            return Ok(key.clone());
        }
        std::env::var(&self.api_key_env)
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| ConfigError::MissingApiKey(self.api_key_env.clone()))
    }
}

/// Generation bounds (`[generation]` section).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileGenerationConfig {
    /// Token-length ceiling per reply.
    pub max_tokens: u32,
    /// Sampling temperature.
    pub temperature: f32,
    /// Per-attempt timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for FileGenerationConfig {
    fn default() -> Self {
        let params = GenerationParams::default();
        Self {
            max_tokens: params.max_tokens,
            temperature: params.temperature,
            timeout_secs: params.request_timeout.as_secs(),
        }
    }
}

impl FileGenerationConfig {
    pub fn to_params(&self) -> GenerationParams {
        GenerationParams::default()
            .with_max_tokens(self.max_tokens)
            .with_temperature(self.temperature)
            .with_request_timeout(Duration::from_secs(self.timeout_secs))
    }
}

/// Fallback chain (`[chain]` section).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileChainConfig {
    /// Ordered model identifiers, attempted left to right.
    pub models: Vec<String>,
}

impl Default for FileChainConfig {
    fn default() -> Self {
        Self {
            models: Model::default_chain()
                .iter()
                .map(|m| m.to_string())
                .collect(),
        }
    }
}

impl FileChainConfig {
    pub fn to_models(&self) -> Vec<Model> {
        self.models
            .iter()
            .map(|name| name.parse().unwrap())
            .collect()
    }
}

/// Quota settings (`[limits]` section).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLimitsConfig {
    /// Generations allowed per signed-in user per UTC calendar day.
    pub daily_limit: usize,
}

impl Default for FileLimitsConfig {
    fn default() -> Self {
        Self { daily_limit: 5 }
    }
}

/// Root configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub provider: FileProviderConfig,
    pub generation: FileGenerationConfig,
    pub chain: FileChainConfig,
    pub limits: FileLimitsConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_mirror_generation_params() {
        let config = FileGenerationConfig::default();
        let params = config.to_params();
        assert_eq!(params.max_tokens, 150);
        assert_eq!(params.temperature, 0.8);
        assert_eq!(params.request_timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_default_chain_models() {
        let chain = FileChainConfig::default().to_models();
        assert_eq!(chain, Model::default_chain());
    }

    #[test]
    fn test_chain_accepts_custom_models() {
        let config = FileChainConfig {
            models: vec!["mistralai/mistral-7b-instruct".to_string()],
        };
        assert_eq!(
            config.to_models(),
            vec![Model::Custom("mistralai/mistral-7b-instruct".to_string())]
        );
    }

    #[test]
    fn test_explicit_api_key_wins() {
        let config = FileProviderConfig {
            api_key: Some("sk-explicit".to_string()),
            api_key_env: "QUOTECRAFT_TEST_KEY_THAT_DOES_NOT_EXIST".to_string(),
            ..Default::default()
        };
        assert_eq!(config.resolve_api_key().unwrap(), "sk-explicit");
    }

    #[test]
    fn test_missing_api_key_names_the_env_var() {
        let config = FileProviderConfig {
            api_key: None,
            api_key_env: "QUOTECRAFT_TEST_KEY_THAT_DOES_NOT_EXIST".to_string(),
            ..Default::default()
        };
        match config.resolve_api_key() {
            Err(ConfigError::MissingApiKey(var)) => {
                assert_eq!(var, "QUOTECRAFT_TEST_KEY_THAT_DOES_NOT_EXIST");
            }
            other => panic!("expected MissingApiKey, got {:?}", other),
        }
    }

    #[test]
    fn test_default_limits() {
        assert_eq!(FileLimitsConfig::default().daily_limit, 5);
    }
}
