//! HuggingFaceProvider -- concrete [`ResponseGenerator`] for the Hugging Face
//! Inference API.
//!
//! Sends the assembled prompt to `POST {base_url}/models/{model}` as a
//! text2text-generation request and returns the first generated candidate.
//!
//! The API token is wrapped in [`secrecy::SecretString`] and is never logged
//! or included in `Debug` output.

pub mod types;

use std::time::Duration;

use reqwest::StatusCode;
use reqwest::header::RETRY_AFTER;
use secrecy::{ExposeSecret, SecretString};

use learnix_core::llm::provider::ResponseGenerator;
use learnix_types::llm::{GenerationConfig, GenerationError};

use self::types::{HfErrorBody, HfRequest, HfResponse};

/// Public Inference API endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api-inference.huggingface.co";

/// Hugging Face Inference API backend.
///
/// # API Key Security
///
/// The token is only exposed when building the `Authorization` header. The
/// provider does not derive Debug.
pub struct HuggingFaceProvider {
    client: reqwest::Client,
    api_key: Option<SecretString>,
    base_url: String,
    model: String,
}

impl HuggingFaceProvider {
    /// Create a new provider.
    ///
    /// # Arguments
    ///
    /// * `api_key` - Hugging Face token; anonymous requests are sent without one
    /// * `model` - Model repository id (e.g., "facebook/blenderbot-400M-distill")
    /// * `timeout` - Per-request HTTP timeout
    pub fn new(
        api_key: Option<SecretString>,
        model: String,
        timeout: Duration,
    ) -> Result<Self, GenerationError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| GenerationError::Provider {
                message: format!("failed to create HTTP client: {e}"),
            })?;

        Ok(Self {
            client,
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
            model,
        })
    }

    /// Override the base URL (useful for dedicated endpoints or proxies).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Full endpoint URL for the configured model.
    pub fn endpoint(&self) -> String {
        format!("{}/models/{}", self.base_url.trim_end_matches('/'), self.model)
    }
}

impl ResponseGenerator for HuggingFaceProvider {
    fn name(&self) -> &str {
        "huggingface"
    }

    async fn generate(
        &self,
        prompt: &str,
        config: &GenerationConfig,
    ) -> Result<String, GenerationError> {
        let body = HfRequest::new(prompt, config);

        let mut request = self.client.post(self.endpoint()).json(&body);
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key.expose_secret());
        }

        let response = request.send().await.map_err(|e| GenerationError::Provider {
            message: format!("HTTP request failed: {e}"),
        })?;

        let status = response.status();
        if !status.is_success() {
            let retry_after_ms = response
                .headers()
                .get(RETRY_AFTER)
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.trim().parse::<u64>().ok())
                .map(|secs| secs.saturating_mul(1000));
            let error_body = response.text().await.unwrap_or_default();
            return Err(map_status(status, &error_body, retry_after_ms));
        }

        let parsed: HfResponse = response.json().await.map_err(|e| {
            GenerationError::Deserialization(format!("failed to parse response: {e}"))
        })?;

        parsed
            .into_first_text()
            .ok_or_else(|| GenerationError::EmptyResponse {
                provider: self.name().to_string(),
            })
    }
}

/// Map a non-success HTTP status to a [`GenerationError`].
fn map_status(status: StatusCode, body: &str, retry_after_ms: Option<u64>) -> GenerationError {
    let message = serde_json::from_str::<HfErrorBody>(body)
        .map(|b| b.error)
        .unwrap_or_else(|_| body.to_string());

    match status.as_u16() {
        401 | 403 => GenerationError::AuthenticationFailed,
        429 => GenerationError::RateLimited { retry_after_ms },
        503 => GenerationError::Unavailable(message),
        400 | 422 => GenerationError::InvalidRequest(message),
        _ => GenerationError::Provider {
            message: format!("HTTP {status}: {message}"),
        },
    }
}
