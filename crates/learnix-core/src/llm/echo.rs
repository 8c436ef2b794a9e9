//! Offline backend that repeats its prompt.
//!
//! Used when no model server is configured and throughout the test suites,
//! where a deterministic reply makes the full interaction cycle checkable.

use learnix_types::llm::{GenerationConfig, GenerationError};

use super::provider::ResponseGenerator;

/// Replies with the prompt it was given, unchanged.
#[derive(Debug, Default, Clone)]
pub struct EchoGenerator;

impl EchoGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl ResponseGenerator for EchoGenerator {
    fn name(&self) -> &str {
        "echo"
    }

    async fn generate(
        &self,
        prompt: &str,
        _config: &GenerationConfig,
    ) -> Result<String, GenerationError> {
        Ok(prompt.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_echo_returns_prompt() {
        let generator = EchoGenerator::new();
        let reply = generator
            .generate("User: hello", &GenerationConfig::default())
            .await
            .unwrap();
        assert_eq!(reply, "User: hello");
    }
}
