//! ResponseGenerator trait definition.
//!
//! This is the narrow abstraction every model backend implements: a prompt
//! string and fixed generation settings in, one decoded reply out.

use learnix_types::llm::{GenerationConfig, GenerationError};

/// Trait for model backends (Hugging Face inference, OpenAI-compatible
/// servers, test doubles).
///
/// Uses native async fn in traits (RPITIT, Rust 2024 edition). Backends are
/// stateless with respect to the conversation: they never see the buffer,
/// only the assembled prompt.
///
/// Implementations live in learnix-infra (e.g., `HuggingFaceProvider`).
pub trait ResponseGenerator: Send + Sync {
    /// Human-readable backend name (e.g., "huggingface", "echo").
    fn name(&self) -> &str;

    /// Generate one reply for `prompt`.
    ///
    /// The prompt has already been bounded to `config.max_input_tokens` by
    /// the caller. The returned text may still contain special tokens.
    fn generate(
        &self,
        prompt: &str,
        config: &GenerationConfig,
    ) -> impl std::future::Future<Output = Result<String, GenerationError>> + Send;
}
