//! Configuration types and defaults for OpenAI-compatible backends.

/// Configuration for an OpenAI-compatible backend.
///
/// Used to construct an [`super::OpenAiCompatibleProvider`].
pub struct OpenAiCompatConfig {
    /// Human-readable backend name reported in spans and errors.
    pub provider_name: String,
    /// Base URL for the API (e.g., "https://api.openai.com/v1").
    pub base_url: String,
    /// API key for authentication. Local servers accept an empty key.
    pub api_key: String,
    /// Model identifier.
    pub model: String,
}

/// OpenAI default base URL.
pub const OPENAI_BASE_URL: &str = "https://api.openai.com/v1";

/// OpenAI hosted API.
pub fn openai_defaults(api_key: &str, model: &str) -> OpenAiCompatConfig {
    OpenAiCompatConfig {
        provider_name: "openai".into(),
        base_url: OPENAI_BASE_URL.into(),
        api_key: api_key.into(),
        model: model.into(),
    }
}

/// A self-hosted inference server at `base_url` (vLLM, llama.cpp, TGI).
pub fn local_defaults(base_url: &str, api_key: Option<&str>, model: &str) -> OpenAiCompatConfig {
    OpenAiCompatConfig {
        provider_name: "openai_compatible".into(),
        base_url: base_url.into(),
        api_key: api_key.unwrap_or_default().into(),
        model: model.into(),
    }
}
