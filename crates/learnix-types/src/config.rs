//! Global configuration types for Learnix.
//!
//! `LearnixConfig` represents the top-level `config.toml` that controls the
//! conversation windows, generation settings, model backend, and HTTP server.

use serde::{Deserialize, Serialize};

use crate::chat::{DEFAULT_CONTEXT_TURNS, DEFAULT_DISPLAY_TURNS, WindowConfig};
use crate::error::ConfigError;
use crate::llm::{GenerationConfig, ProviderConfig};

/// Top-level configuration for Learnix.
///
/// Loaded from `~/.learnix/config.toml`. All fields have sensible defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LearnixConfig {
    /// Most recent turns joined into the model prompt.
    #[serde(default = "default_context_turns")]
    pub context_turns: usize,

    /// Most recent turns shown to the user.
    #[serde(default = "default_display_turns")]
    pub display_turns: usize,

    /// Name the bot is shown under.
    #[serde(default = "default_bot_name")]
    pub bot_name: String,

    #[serde(default)]
    pub generation: GenerationConfig,

    #[serde(default)]
    pub provider: ProviderConfig,

    #[serde(default)]
    pub server: ServerConfig,
}

fn default_context_turns() -> usize {
    DEFAULT_CONTEXT_TURNS
}

fn default_display_turns() -> usize {
    DEFAULT_DISPLAY_TURNS
}

fn default_bot_name() -> String {
    "Learnix".to_string()
}

impl Default for LearnixConfig {
    fn default() -> Self {
        Self {
            context_turns: default_context_turns(),
            display_turns: default_display_turns(),
            bot_name: default_bot_name(),
            generation: GenerationConfig::default(),
            provider: ProviderConfig::default(),
            server: ServerConfig::default(),
        }
    }
}

impl LearnixConfig {
    /// The conversation window sizes as a single value.
    pub fn windows(&self) -> WindowConfig {
        WindowConfig {
            context_turns: self.context_turns,
            display_turns: self.display_turns,
        }
    }

    /// Reject settings that would make every interaction fail.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.generation
            .validate()
            .map_err(|e| ConfigError::Invalid(e.to_string()))?;
        if self.bot_name.trim().is_empty() {
            return Err(ConfigError::Invalid("bot_name must not be empty".to_string()));
        }
        if self.server.session_ttl_secs == 0 {
            return Err(ConfigError::Invalid(
                "server.session_ttl_secs must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}

/// HTTP server bind settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    /// Sessions idle for longer than this are dropped.
    #[serde(default = "default_session_ttl_secs")]
    pub session_ttl_secs: u64,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8501
}

fn default_session_ttl_secs() -> u64 {
    1800
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            session_ttl_secs: default_session_ttl_secs(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::ProviderType;

    #[test]
    fn test_config_default_values() {
        let config = LearnixConfig::default();
        assert_eq!(config.context_turns, 3);
        assert_eq!(config.display_turns, 6);
        assert_eq!(config.bot_name, "Learnix");
        assert_eq!(config.server.port, 8501);
        assert_eq!(config.server.session_ttl_secs, 1800);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_deserialize_with_defaults() {
        let config: LearnixConfig = toml::from_str("").unwrap();
        assert_eq!(config.context_turns, 3);
        assert_eq!(config.display_turns, 6);
        assert_eq!(config.generation.max_input_tokens, 512);
        assert_eq!(config.provider.provider_type, ProviderType::HuggingFace);
    }

    #[test]
    fn test_config_deserialize_with_values() {
        let toml_str = r#"
context_turns = 4
display_turns = 10
bot_name = "Tutor"

[generation]
max_output_tokens = 60

[provider]
provider_type = "openai_compatible"
model = "llama3"
base_url = "http://localhost:11434/v1"
api_key_env = "LOCAL_KEY"

[server]
port = 9000
session_ttl_secs = 600
"#;
        let config: LearnixConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.context_turns, 4);
        assert_eq!(config.display_turns, 10);
        assert_eq!(config.bot_name, "Tutor");
        assert_eq!(config.generation.max_output_tokens, 60);
        assert_eq!(config.generation.pad_token_id, 2);
        assert_eq!(config.provider.provider_type, ProviderType::OpenAiCompatible);
        assert_eq!(config.provider.base_url.as_deref(), Some("http://localhost:11434/v1"));
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.session_ttl_secs, 600);
    }

    #[test]
    fn test_config_windows() {
        let config = LearnixConfig {
            context_turns: 2,
            display_turns: 8,
            ..LearnixConfig::default()
        };
        let windows = config.windows();
        assert_eq!(windows.context_turns, 2);
        assert_eq!(windows.display_turns, 8);
    }

    #[test]
    fn test_config_validate_rejects_bad_generation() {
        let mut config = LearnixConfig::default();
        config.generation.num_return_sequences = 2;
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_config_validate_rejects_zero_session_ttl() {
        let mut config = LearnixConfig::default();
        config.server.session_ttl_secs = 0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Invalid(msg)) if msg.contains("session_ttl_secs")
        ));
    }

    #[test]
    fn test_config_validate_rejects_blank_bot_name() {
        let config = LearnixConfig {
            bot_name: "   ".to_string(),
            ..LearnixConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
