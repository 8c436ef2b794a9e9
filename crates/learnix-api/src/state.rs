//! Application state wiring the engine, session store, and configuration.
//!
//! AppState is shared by the CLI commands and the REST API handlers. The
//! engine is stateless; conversation state lives in the session store.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;

use learnix_core::chat::engine::ChatEngine;
use learnix_core::chat::store::SessionStore;
use learnix_core::llm::box_provider::BoxResponseGenerator;
use learnix_infra::config::{load_config, resolve_data_dir};
use learnix_infra::llm::{create_provider, resolve_api_key};
use learnix_types::config::LearnixConfig;

use crate::cli::ConfigOverrides;

/// How often the server looks for idle sessions.
const SESSION_SWEEP_INTERVAL: Duration = Duration::from_secs(60);

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<ChatEngine>,
    pub sessions: SessionStore,
    pub config: Arc<LearnixConfig>,
    pub data_dir: PathBuf,
}

impl AppState {
    /// Load configuration, apply command-line overrides, and build the
    /// configured backend.
    pub async fn init(overrides: &ConfigOverrides) -> anyhow::Result<Self> {
        let data_dir = resolve_data_dir();
        let mut config = load_config(&data_dir).await;
        overrides.apply(&mut config);
        config
            .validate()
            .context("configuration is invalid after applying overrides")?;

        let api_key = overrides
            .api_key()
            .or_else(|| resolve_api_key(&config.provider));
        let generator = create_provider(&config.provider, api_key)
            .with_context(|| format!("failed to create {} backend", config.provider.provider_type))?;

        tracing::debug!(
            provider = %config.provider.provider_type,
            model = %config.provider.model,
            context_turns = config.context_turns,
            display_turns = config.display_turns,
            "Application state initialized"
        );

        Ok(Self::new(config, generator, data_dir))
    }

    /// Wire state from already-resolved parts.
    pub fn new(config: LearnixConfig, generator: BoxResponseGenerator, data_dir: PathBuf) -> Self {
        let engine = ChatEngine::new(generator, config.generation.clone());
        let sessions = SessionStore::new(config.windows());
        Self {
            engine: Arc::new(engine),
            sessions,
            config: Arc::new(config),
            data_dir,
        }
    }

    pub fn bot_name(&self) -> &str {
        &self.config.bot_name
    }

    /// Periodically drop sessions idle for longer than `server.session_ttl_secs`.
    ///
    /// Runs until the returned handle is aborted.
    pub fn spawn_session_sweeper(&self) -> tokio::task::JoinHandle<()> {
        let sessions = self.sessions.clone();
        let ttl = Duration::from_secs(self.config.server.session_ttl_secs);

        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(SESSION_SWEEP_INTERVAL);
            ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
            loop {
                ticker.tick().await;
                let evicted = sessions.evict_idle(ttl);
                if evicted > 0 {
                    tracing::info!(
                        evicted,
                        remaining = sessions.len(),
                        ttl_secs = ttl.as_secs(),
                        "Idle sessions evicted"
                    );
                }
            }
        })
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use learnix_core::llm::echo::EchoGenerator;

    /// State backed by the echo generator and default configuration.
    pub fn echo_state() -> AppState {
        AppState::new(
            LearnixConfig::default(),
            BoxResponseGenerator::new(EchoGenerator::new()),
            std::env::temp_dir(),
        )
    }
}
