//! Model backend implementations.
//!
//! Contains the concrete implementations of the [`ResponseGenerator`] trait
//! defined in `learnix-core`, a factory ([`create_provider`]) that builds
//! the configured backend, and a connection test
//! ([`test_provider_connection`]).
//!
//! [`ResponseGenerator`]: learnix_core::llm::provider::ResponseGenerator

pub mod huggingface;
pub mod openai_compat;

use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};

use learnix_core::llm::box_provider::BoxResponseGenerator;
use learnix_core::llm::echo::EchoGenerator;
use learnix_types::llm::{GenerationConfig, GenerationError, ProviderConfig, ProviderType};

use self::huggingface::HuggingFaceProvider;
use self::openai_compat::OpenAiCompatibleProvider;

/// Prompt sent by [`test_provider_connection`].
pub const CONNECTION_TEST_PROMPT: &str = "User: Hello";

/// Read the API key from the environment variable named in `config`.
///
/// Returns `None` when no variable is configured or it is unset or blank.
pub fn resolve_api_key(config: &ProviderConfig) -> Option<SecretString> {
    let var = config.api_key_env.as_deref()?;
    std::env::var(var)
        .ok()
        .filter(|value| !value.trim().is_empty())
        .map(SecretString::from)
}

/// Create a [`BoxResponseGenerator`] from a [`ProviderConfig`].
///
/// # Arguments
///
/// * `config` - Backend type, model, base URL, and timeout
/// * `api_key` - The resolved API key, if any
///
/// # Errors
///
/// Returns `AuthenticationFailed` when the hosted OpenAI API is selected
/// without a key, or `Provider` if the HTTP client cannot be built.
pub fn create_provider(
    config: &ProviderConfig,
    api_key: Option<SecretString>,
) -> Result<BoxResponseGenerator, GenerationError> {
    match config.provider_type {
        ProviderType::HuggingFace => {
            let mut provider = HuggingFaceProvider::new(
                api_key,
                config.model.clone(),
                Duration::from_secs(config.timeout_secs),
            )?;
            if let Some(base_url) = config.base_url.as_deref() {
                provider = provider.with_base_url(base_url);
            }
            Ok(BoxResponseGenerator::new(provider))
        }
        ProviderType::OpenAiCompatible => {
            let key = api_key.as_ref().map(|k| k.expose_secret());
            let provider = match config.base_url.as_deref() {
                Some(base_url) => OpenAiCompatibleProvider::new(
                    openai_compat::config::local_defaults(base_url, key, &config.model),
                ),
                None => {
                    let key = key.ok_or(GenerationError::AuthenticationFailed)?;
                    OpenAiCompatibleProvider::openai(key, &config.model)
                }
            };
            Ok(BoxResponseGenerator::new(provider))
        }
        ProviderType::Echo => Ok(BoxResponseGenerator::new(EchoGenerator::new())),
    }
}

/// Test backend connectivity by sending a minimal prompt.
///
/// Returns the raw reply on success.
pub async fn test_provider_connection(
    provider: &BoxResponseGenerator,
) -> Result<String, GenerationError> {
    let config = GenerationConfig {
        max_output_tokens: 10,
        ..GenerationConfig::default()
    };
    provider.generate(CONNECTION_TEST_PROMPT, &config).await
}
