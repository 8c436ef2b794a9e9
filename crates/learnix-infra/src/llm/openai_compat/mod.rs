//! OpenAI-compatible backend.
//!
//! A single [`OpenAiCompatibleProvider`] serves the OpenAI API and any
//! self-hosted server that speaks the chat completions protocol. The
//! assembled prompt is sent as one user message; the first choice is the
//! reply.

pub mod config;

use async_openai::Client;
use async_openai::config::OpenAIConfig;
use async_openai::types::chat::{
    ChatCompletionRequestMessage, ChatCompletionRequestUserMessage,
    ChatCompletionRequestUserMessageContent, CreateChatCompletionRequest,
};

use learnix_core::llm::provider::ResponseGenerator;
use learnix_types::llm::{GenerationConfig, GenerationError};

use self::config::OpenAiCompatConfig;

/// Backend for any OpenAI-compatible API.
///
/// # API Key Security
///
/// Does NOT derive Debug to prevent accidental exposure of the API key
/// stored inside the `async_openai::Client`.
pub struct OpenAiCompatibleProvider {
    client: Client<OpenAIConfig>,
    provider_name: String,
    model: String,
}

impl OpenAiCompatibleProvider {
    pub fn new(config: OpenAiCompatConfig) -> Self {
        let openai_config = OpenAIConfig::new()
            .with_api_key(&config.api_key)
            .with_api_base(&config.base_url);

        Self {
            client: Client::with_config(openai_config),
            provider_name: config.provider_name,
            model: config.model,
        }
    }

    /// Create an OpenAI provider against `https://api.openai.com/v1`.
    pub fn openai(api_key: &str, model: &str) -> Self {
        Self::new(config::openai_defaults(api_key, model))
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Build a single-message chat request for `prompt`.
    fn build_request(&self, prompt: &str, config: &GenerationConfig) -> CreateChatCompletionRequest {
        let message = ChatCompletionRequestMessage::User(ChatCompletionRequestUserMessage {
            content: ChatCompletionRequestUserMessageContent::Text(prompt.to_string()),
            name: None,
        });

        CreateChatCompletionRequest {
            model: self.model.clone(),
            messages: vec![message],
            max_completion_tokens: Some(config.max_output_tokens),
            n: Some(config.num_return_sequences as u8),
            ..Default::default()
        }
    }
}

impl ResponseGenerator for OpenAiCompatibleProvider {
    fn name(&self) -> &str {
        &self.provider_name
    }

    async fn generate(
        &self,
        prompt: &str,
        config: &GenerationConfig,
    ) -> Result<String, GenerationError> {
        let request = self.build_request(prompt, config);

        let response = self
            .client
            .chat()
            .create(request)
            .await
            .map_err(map_openai_error)?;

        response
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content.unwrap_or_default())
            .ok_or_else(|| GenerationError::EmptyResponse {
                provider: self.provider_name.clone(),
            })
    }
}

/// Map an `async_openai::error::OpenAIError` to a [`GenerationError`].
fn map_openai_error(err: async_openai::error::OpenAIError) -> GenerationError {
    use async_openai::error::OpenAIError;

    match &err {
        OpenAIError::ApiError(api_err) => {
            let code = api_err.code.as_deref().unwrap_or("");
            let error_type = api_err.r#type.as_deref().unwrap_or("");

            if code == "invalid_api_key"
                || error_type == "authentication_error"
                || api_err.message.contains("Incorrect API key")
            {
                GenerationError::AuthenticationFailed
            } else if code == "rate_limit_exceeded" || error_type == "rate_limit_error" {
                GenerationError::RateLimited {
                    retry_after_ms: None,
                }
            } else if code == "model_not_found" {
                GenerationError::Unavailable(api_err.message.clone())
            } else {
                GenerationError::Provider {
                    message: err.to_string(),
                }
            }
        }
        OpenAIError::Reqwest(reqwest_err) => match reqwest_err.status().map(|s| s.as_u16()) {
            Some(401) | Some(403) => GenerationError::AuthenticationFailed,
            Some(429) => GenerationError::RateLimited {
                retry_after_ms: None,
            },
            Some(503) => GenerationError::Unavailable(err.to_string()),
            _ => GenerationError::Provider {
                message: err.to_string(),
            },
        },
        OpenAIError::JSONDeserialize(_, content) => {
            GenerationError::Deserialization(format!("failed to parse response: {content}"))
        }
        OpenAIError::InvalidArgument(msg) => GenerationError::InvalidRequest(msg.clone()),
        _ => GenerationError::Provider {
            message: err.to_string(),
        },
    }
}
