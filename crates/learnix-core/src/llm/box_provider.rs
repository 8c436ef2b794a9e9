//! BoxResponseGenerator -- object-safe dynamic dispatch wrapper for
//! ResponseGenerator.
//!
//! 1. Define an object-safe `ResponseGeneratorDyn` trait with boxed futures
//! 2. Blanket-impl `ResponseGeneratorDyn` for all `T: ResponseGenerator`
//! 3. `BoxResponseGenerator` wraps `Box<dyn ResponseGeneratorDyn>` and delegates

use std::future::Future;
use std::pin::Pin;

use learnix_types::llm::{GenerationConfig, GenerationError};

use super::provider::ResponseGenerator;

/// Object-safe version of [`ResponseGenerator`] with boxed futures.
///
/// This trait exists solely to enable dynamic dispatch
/// (`dyn ResponseGeneratorDyn`). A blanket implementation is provided for
/// all types implementing `ResponseGenerator`.
pub trait ResponseGeneratorDyn: Send + Sync {
    fn name(&self) -> &str;

    fn generate_boxed<'a>(
        &'a self,
        prompt: &'a str,
        config: &'a GenerationConfig,
    ) -> Pin<Box<dyn Future<Output = Result<String, GenerationError>> + Send + 'a>>;
}

impl<T: ResponseGenerator> ResponseGeneratorDyn for T {
    fn name(&self) -> &str {
        ResponseGenerator::name(self)
    }

    fn generate_boxed<'a>(
        &'a self,
        prompt: &'a str,
        config: &'a GenerationConfig,
    ) -> Pin<Box<dyn Future<Output = Result<String, GenerationError>> + Send + 'a>> {
        Box::pin(self.generate(prompt, config))
    }
}

/// Type-erased model backend for runtime selection.
///
/// Since `ResponseGenerator` uses RPITIT, it cannot be used as a trait
/// object directly. `BoxResponseGenerator` provides equivalent methods that
/// delegate to the inner `ResponseGeneratorDyn` trait object.
pub struct BoxResponseGenerator {
    inner: Box<dyn ResponseGeneratorDyn + Send + Sync>,
}

impl BoxResponseGenerator {
    /// Wrap a concrete `ResponseGenerator` in a type-erased box.
    pub fn new<T: ResponseGenerator + 'static>(generator: T) -> Self {
        Self {
            inner: Box::new(generator),
        }
    }

    pub fn name(&self) -> &str {
        self.inner.name()
    }

    /// Generate one reply for `prompt`.
    pub async fn generate(
        &self,
        prompt: &str,
        config: &GenerationConfig,
    ) -> Result<String, GenerationError> {
        self.inner.generate_boxed(prompt, config).await
    }
}

impl std::fmt::Debug for BoxResponseGenerator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BoxResponseGenerator")
            .field("name", &self.name())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::echo::EchoGenerator;

    #[tokio::test]
    async fn test_boxed_generator_delegates() {
        let generator = BoxResponseGenerator::new(EchoGenerator::new());
        assert_eq!(generator.name(), "echo");

        let reply = generator
            .generate("User: hi", &GenerationConfig::default())
            .await
            .unwrap();
        assert_eq!(reply, "User: hi");
    }

    #[test]
    fn test_debug_omits_internals() {
        let generator = BoxResponseGenerator::new(EchoGenerator::new());
        assert_eq!(
            format!("{generator:?}"),
            "BoxResponseGenerator { name: \"echo\" }"
        );
    }
}
