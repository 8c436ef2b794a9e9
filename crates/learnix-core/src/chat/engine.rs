//! Chat engine for Learnix.
//!
//! ChatEngine drives one interaction cycle: append the user turn, assemble
//! the prompt from the context window, call the backend through
//! BoxResponseGenerator, clean the reply, and append it as the bot turn.
//! Every backend call is wrapped in a `gen_ai.generate` span.

use tracing::{Instrument, debug, info_span, warn};

use learnix_types::llm::{GenerationConfig, GenerationError};

use crate::llm::box_provider::BoxResponseGenerator;
use crate::llm::decode::strip_special_tokens;
use crate::llm::truncate::{estimate_tokens, truncate_to_recent};

use super::session::ChatSession;

/// Runs generation on behalf of chat sessions.
///
/// The engine holds no conversation state of its own, so one instance is
/// shared across every session.
pub struct ChatEngine {
    generator: BoxResponseGenerator,
    config: GenerationConfig,
}

impl ChatEngine {
    pub fn new(generator: BoxResponseGenerator, config: GenerationConfig) -> Self {
        Self { generator, config }
    }

    /// Name of the backend in use.
    pub fn generator_name(&self) -> &str {
        self.generator.name()
    }

    pub fn generator(&self) -> &BoxResponseGenerator {
        &self.generator
    }

    pub fn config(&self) -> &GenerationConfig {
        &self.config
    }

    /// Generate a reply for an already-assembled prompt.
    ///
    /// Prompts over `max_input_tokens` are cut to their most recent part
    /// before the backend sees them. The reply comes back with special
    /// tokens stripped and is otherwise untouched; an empty reply is still
    /// a reply.
    pub async fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
        self.config.validate()?;

        let bounded = truncate_to_recent(prompt, self.config.max_input_tokens);
        if bounded.len() < prompt.len() {
            debug!(
                original_tokens = estimate_tokens(prompt),
                max_input_tokens = self.config.max_input_tokens,
                "Prompt truncated to most recent context"
            );
        }

        let span = info_span!(
            "gen_ai.generate",
            gen_ai.operation.name = "chat",
            gen_ai.provider.name = self.generator.name(),
            gen_ai.request.max_tokens = self.config.max_output_tokens,
            gen_ai.usage.input_tokens = estimate_tokens(bounded),
        );

        let raw = self
            .generator
            .generate(bounded, &self.config)
            .instrument(span)
            .await?;

        Ok(strip_special_tokens(&raw))
    }

    /// Run one full interaction cycle on `session`.
    ///
    /// The user turn is appended first and stays in the buffer even when
    /// generation fails. On success the cleaned reply is appended as the bot
    /// turn and returned.
    pub async fn respond(
        &self,
        session: &mut ChatSession,
        user_text: &str,
    ) -> Result<String, GenerationError> {
        session.record_user(user_text);
        let prompt = session.context_prompt();

        match self.generate(&prompt).await {
            Ok(reply) => {
                session.record_bot(reply.clone());
                Ok(reply)
            }
            Err(e) => {
                warn!(session_id = %session.id(), error = %e, "Generation failed");
                Err(e)
            }
        }
    }
}

impl std::fmt::Debug for ChatEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChatEngine")
            .field("generator", &self.generator.name())
            .field("config", &self.config)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::echo::EchoGenerator;
    use crate::llm::provider::ResponseGenerator;
    use learnix_types::chat::{Speaker, Turn, WindowConfig};

    struct FailingGenerator;

    impl ResponseGenerator for FailingGenerator {
        fn name(&self) -> &str {
            "failing"
        }

        async fn generate(
            &self,
            _prompt: &str,
            _config: &GenerationConfig,
        ) -> Result<String, GenerationError> {
            Err(GenerationError::Unavailable("model is loading".to_string()))
        }
    }

    struct FixedGenerator(&'static str);

    impl ResponseGenerator for FixedGenerator {
        fn name(&self) -> &str {
            "fixed"
        }

        async fn generate(
            &self,
            _prompt: &str,
            _config: &GenerationConfig,
        ) -> Result<String, GenerationError> {
            Ok(self.0.to_string())
        }
    }

    fn echo_engine() -> ChatEngine {
        ChatEngine::new(
            BoxResponseGenerator::new(EchoGenerator::new()),
            GenerationConfig::default(),
        )
    }

    #[tokio::test]
    async fn test_cycle_with_echo_on_empty_buffer() {
        let engine = echo_engine();
        let mut session = ChatSession::new(WindowConfig::default());

        let reply = engine.respond(&mut session, "x").await.unwrap();
        assert_eq!(reply, "User: x");

        let turns = session.buffer().turns();
        assert_eq!(turns.len(), 2);
        assert_eq!(turns[0], Turn::user("x"));
        assert_eq!(turns[1], Turn::bot("User: x"));
    }

    #[tokio::test]
    async fn test_cycle_appends_user_then_bot() {
        let engine = echo_engine();
        let mut session = ChatSession::new(WindowConfig::default());
        engine.respond(&mut session, "first").await.unwrap();
        engine.respond(&mut session, "second").await.unwrap();

        let turns = session.buffer().turns();
        assert_eq!(turns.len(), 4);
        assert_eq!(turns[2], Turn::user("second"));
        assert_eq!(turns[3].speaker(), Speaker::Bot);
        assert_eq!(session.exchange_count(), 2);
    }

    #[tokio::test]
    async fn test_prompt_uses_only_context_window() {
        let engine = echo_engine();
        let mut session = ChatSession::new(WindowConfig::default());
        engine.respond(&mut session, "a").await.unwrap();
        let reply = engine.respond(&mut session, "b").await.unwrap();

        // Context of 3 turns: User a, Bot "User: a", User b.
        assert_eq!(reply, "User: a Bot: User: a User: b");
    }

    #[tokio::test]
    async fn test_failure_keeps_user_turn() {
        let engine = ChatEngine::new(
            BoxResponseGenerator::new(FailingGenerator),
            GenerationConfig::default(),
        );
        let mut session = ChatSession::new(WindowConfig::default());

        let result = engine.respond(&mut session, "hello").await;
        assert!(matches!(result, Err(GenerationError::Unavailable(_))));
        assert_eq!(session.buffer().turns(), &[Turn::user("hello")]);
        assert_eq!(session.exchange_count(), 0);
    }

    #[tokio::test]
    async fn test_reply_special_tokens_stripped() {
        let engine = ChatEngine::new(
            BoxResponseGenerator::new(FixedGenerator("<s> Break tasks into steps.</s>")),
            GenerationConfig::default(),
        );
        let mut session = ChatSession::new(WindowConfig::default());
        let reply = engine.respond(&mut session, "tips?").await.unwrap();
        assert_eq!(reply, " Break tasks into steps.");
        assert_eq!(session.buffer().last(), Some(&Turn::bot(" Break tasks into steps.")));
    }

    #[tokio::test]
    async fn test_empty_reply_still_recorded() {
        let engine = ChatEngine::new(
            BoxResponseGenerator::new(FixedGenerator("")),
            GenerationConfig::default(),
        );
        let mut session = ChatSession::new(WindowConfig::default());

        let reply = engine.respond(&mut session, "hi").await.unwrap();
        assert_eq!(reply, "");
        assert_eq!(session.buffer().turns(), &[Turn::user("hi"), Turn::bot("")]);
        assert_eq!(session.exchange_count(), 1);
    }

    #[tokio::test]
    async fn test_reply_reduced_to_nothing_by_stripping() {
        let engine = ChatEngine::new(
            BoxResponseGenerator::new(FixedGenerator("<pad></s>")),
            GenerationConfig::default(),
        );
        assert_eq!(engine.generate("User: hi").await.unwrap(), "");
    }

    #[tokio::test]
    async fn test_echo_cycle_keeps_surrounding_whitespace() {
        let engine = echo_engine();
        let mut session = ChatSession::new(WindowConfig::default());

        let reply = engine.respond(&mut session, "x ").await.unwrap();
        assert_eq!(reply, "User: x ");
        assert_eq!(
            session.buffer().turns(),
            &[Turn::user("x "), Turn::bot("User: x ")]
        );
    }

    #[tokio::test]
    async fn test_long_prompt_truncated_to_recent() {
        let config = GenerationConfig {
            max_input_tokens: 4,
            ..GenerationConfig::default()
        };
        let engine = ChatEngine::new(BoxResponseGenerator::new(EchoGenerator::new()), config);
        let reply = engine.generate("User: old stuff User: newest").await.unwrap();
        // 4 tokens is 16 chars, taken from the end.
        assert_eq!(reply, "uff User: newest");
    }

    #[tokio::test]
    async fn test_invalid_config_rejected() {
        let config = GenerationConfig {
            num_return_sequences: 3,
            ..GenerationConfig::default()
        };
        let engine = ChatEngine::new(BoxResponseGenerator::new(EchoGenerator::new()), config);
        let err = engine.generate("User: hi").await.unwrap_err();
        assert!(matches!(err, GenerationError::InvalidRequest(_)));
    }
}
