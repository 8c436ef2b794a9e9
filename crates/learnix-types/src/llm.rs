//! Text generation types for Learnix.
//!
//! These types model the data shapes for model backend interactions:
//! generation settings, backend selection, and error handling.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Default conversational model (a distilled sequence-to-sequence chat model).
pub const DEFAULT_MODEL: &str = "facebook/blenderbot-400M-distill";

/// Fixed generation settings applied to every reply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationConfig {
    /// Upper bound on the length of a generated reply, in tokens.
    #[serde(default = "default_max_output_tokens")]
    pub max_output_tokens: u32,
    /// Number of candidate sequences requested. Only `1` is supported.
    #[serde(default = "default_num_return_sequences")]
    pub num_return_sequences: u32,
    /// Padding token id, taken from the model vocabulary's end-of-sequence id.
    #[serde(default = "default_pad_token_id")]
    pub pad_token_id: u32,
    /// Prompts longer than this many tokens are truncated from the front.
    #[serde(default = "default_max_input_tokens")]
    pub max_input_tokens: u32,
}

fn default_max_output_tokens() -> u32 {
    100
}

fn default_num_return_sequences() -> u32 {
    1
}

fn default_pad_token_id() -> u32 {
    2
}

fn default_max_input_tokens() -> u32 {
    512
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            max_output_tokens: default_max_output_tokens(),
            num_return_sequences: default_num_return_sequences(),
            pad_token_id: default_pad_token_id(),
            max_input_tokens: default_max_input_tokens(),
        }
    }
}

impl GenerationConfig {
    /// Check the settings a backend can actually honor.
    pub fn validate(&self) -> Result<(), GenerationError> {
        if self.num_return_sequences != 1 {
            return Err(GenerationError::InvalidRequest(format!(
                "num_return_sequences must be 1, got {}",
                self.num_return_sequences
            )));
        }
        if self.max_output_tokens == 0 {
            return Err(GenerationError::InvalidRequest(
                "max_output_tokens must be greater than 0".to_string(),
            ));
        }
        if self.max_input_tokens == 0 {
            return Err(GenerationError::InvalidRequest(
                "max_input_tokens must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}

/// Errors from model backend operations.
#[derive(Debug, thiserror::Error)]
pub enum GenerationError {
    #[error("provider error: {message}")]
    Provider { message: String },

    #[error("deserialization error: {0}")]
    Deserialization(String),

    #[error("rate limited (retry after {retry_after_ms:?}ms)")]
    RateLimited { retry_after_ms: Option<u64> },

    #[error("model unavailable: {0}")]
    Unavailable(String),

    #[error("authentication failed")]
    AuthenticationFailed,

    #[error("invalid request: {0}")]
    InvalidRequest(String),

    #[error("empty response from {provider}")]
    EmptyResponse { provider: String },
}

/// Type of model backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProviderType {
    /// Hugging Face text2text Inference API.
    #[serde(rename = "huggingface")]
    HuggingFace,
    /// Any server speaking the OpenAI chat completions protocol.
    #[serde(rename = "openai_compatible")]
    OpenAiCompatible,
    /// Offline backend that replies with its own prompt.
    Echo,
}

impl fmt::Display for ProviderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProviderType::HuggingFace => write!(f, "huggingface"),
            ProviderType::OpenAiCompatible => write!(f, "openai_compatible"),
            ProviderType::Echo => write!(f, "echo"),
        }
    }
}

impl FromStr for ProviderType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "huggingface" | "hf" => Ok(ProviderType::HuggingFace),
            "openai_compatible" | "openai" => Ok(ProviderType::OpenAiCompatible),
            "echo" => Ok(ProviderType::Echo),
            other => Err(format!("invalid provider type: '{other}'")),
        }
    }
}

/// Configuration for the model backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    #[serde(default = "default_provider_type")]
    pub provider_type: ProviderType,
    /// Model identifier passed to the backend.
    #[serde(default = "default_model")]
    pub model: String,
    /// Override the backend's default base URL.
    #[serde(default)]
    pub base_url: Option<String>,
    /// Name of the environment variable holding the API key.
    #[serde(default = "default_api_key_env")]
    pub api_key_env: Option<String>,
    /// HTTP timeout for a single generation call.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_provider_type() -> ProviderType {
    ProviderType::HuggingFace
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

fn default_api_key_env() -> Option<String> {
    Some("HF_TOKEN".to_string())
}

fn default_timeout_secs() -> u64 {
    120
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            provider_type: default_provider_type(),
            model: default_model(),
            base_url: None,
            api_key_env: default_api_key_env(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generation_config_defaults() {
        let config = GenerationConfig::default();
        assert_eq!(config.max_output_tokens, 100);
        assert_eq!(config.num_return_sequences, 1);
        assert_eq!(config.pad_token_id, 2);
        assert_eq!(config.max_input_tokens, 512);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_generation_config_partial_json_uses_defaults() {
        let config: GenerationConfig = serde_json::from_str(r#"{"max_output_tokens":60}"#).unwrap();
        assert_eq!(config.max_output_tokens, 60);
        assert_eq!(config.max_input_tokens, 512);
    }

    #[test]
    fn test_generation_config_rejects_multiple_sequences() {
        let config = GenerationConfig {
            num_return_sequences: 3,
            ..GenerationConfig::default()
        };
        match config.validate() {
            Err(GenerationError::InvalidRequest(msg)) => assert!(msg.contains("3")),
            other => panic!("expected InvalidRequest, got {other:?}"),
        }
    }

    #[test]
    fn test_generation_config_rejects_zero_lengths() {
        let config = GenerationConfig {
            max_output_tokens: 0,
            ..GenerationConfig::default()
        };
        assert!(config.validate().is_err());

        let config = GenerationConfig {
            max_input_tokens: 0,
            ..GenerationConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_provider_type_roundtrip() {
        for pt in [
            ProviderType::HuggingFace,
            ProviderType::OpenAiCompatible,
            ProviderType::Echo,
        ] {
            let s = pt.to_string();
            let parsed: ProviderType = s.parse().unwrap();
            assert_eq!(pt, parsed);
        }
    }

    #[test]
    fn test_provider_type_aliases() {
        assert_eq!("HF".parse::<ProviderType>().unwrap(), ProviderType::HuggingFace);
        assert_eq!(
            "openai".parse::<ProviderType>().unwrap(),
            ProviderType::OpenAiCompatible
        );
        assert!("bedrock".parse::<ProviderType>().is_err());
    }

    #[test]
    fn test_provider_type_serde() {
        let json = serde_json::to_string(&ProviderType::HuggingFace).unwrap();
        assert_eq!(json, "\"huggingface\"");
        let parsed: ProviderType = serde_json::from_str("\"openai_compatible\"").unwrap();
        assert_eq!(parsed, ProviderType::OpenAiCompatible);
    }

    #[test]
    fn test_provider_config_defaults() {
        let config = ProviderConfig::default();
        assert_eq!(config.provider_type, ProviderType::HuggingFace);
        assert_eq!(config.model, DEFAULT_MODEL);
        assert!(config.base_url.is_none());
        assert_eq!(config.api_key_env.as_deref(), Some("HF_TOKEN"));
    }

    #[test]
    fn test_generation_error_display() {
        let err = GenerationError::EmptyResponse {
            provider: "huggingface".to_string(),
        };
        assert_eq!(err.to_string(), "empty response from huggingface");

        let err = GenerationError::RateLimited {
            retry_after_ms: Some(1500),
        };
        assert!(err.to_string().contains("1500"));
    }
}
