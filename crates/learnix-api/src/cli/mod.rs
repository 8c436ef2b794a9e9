//! CLI command definitions for the `learnix` binary.
//!
//! Uses clap derive macros for argument parsing. Backend and window settings
//! from `config.toml` can be overridden per invocation with global flags.

pub mod advice;
pub mod ask;
pub mod chat;
pub mod config;
pub mod provider;

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;
use secrecy::SecretString;

use learnix_types::advice::AdviceTopic;
use learnix_types::config::LearnixConfig;
use learnix_types::llm::ProviderType;

/// A supportive chat companion for learners and job-seekers.
#[derive(Parser)]
#[command(name = "learnix", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output machine-readable JSON instead of styled text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress all output except errors.
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Detailed output (-v for verbose, -vv for debug/trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Export tracing spans with OpenTelemetry (stdout exporter).
    #[arg(long, global = true)]
    pub otel: bool,

    #[command(flatten)]
    pub overrides: ConfigOverrides,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Default log filter derived from `-v` / `--quiet`.
    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 if self.quiet => "error",
            0 => "warn",
            1 => "info,learnix=debug",
            _ => "trace",
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the REST API server and web page.
    Serve {
        /// Port to listen on (defaults to `server.port` in config.toml).
        #[arg(short, long)]
        port: Option<u16>,

        /// Host to bind to (defaults to `server.host` in config.toml).
        #[arg(long)]
        host: Option<String>,
    },

    /// Chat interactively in the terminal.
    Chat,

    /// Ask a single question and print the reply.
    Ask {
        /// The message to send.
        message: String,
    },

    /// Show canned advice for a topic (lists topics when omitted).
    Advice {
        /// Topic: time-management or career-guidance.
        topic: Option<AdviceTopic>,
    },

    /// Inspect the configured model backend.
    Provider {
        #[command(subcommand)]
        action: provider::ProviderCommand,
    },

    /// Inspect the effective configuration.
    Config {
        #[command(subcommand)]
        action: config::ConfigCommand,
    },

    /// Generate shell completions.
    Completions {
        /// Shell to generate completions for.
        shell: Shell,
    },
}

/// Per-invocation overrides for values in `config.toml`.
#[derive(Args, Debug, Default)]
pub struct ConfigOverrides {
    /// Model backend: huggingface, openai_compatible, or echo.
    #[arg(long, global = true, env = "LEARNIX_PROVIDER", value_name = "TYPE")]
    pub provider: Option<ProviderType>,

    /// Model identifier passed to the backend.
    #[arg(long, global = true, env = "LEARNIX_MODEL")]
    pub model: Option<String>,

    /// Base URL of the backend API.
    #[arg(long, global = true, env = "LEARNIX_BASE_URL")]
    pub base_url: Option<String>,

    /// Number of recent turns sent to the model.
    #[arg(long, global = true)]
    pub context_turns: Option<usize>,

    /// Number of recent turns shown.
    #[arg(long, global = true)]
    pub display_turns: Option<usize>,

    /// API key for the backend (takes precedence over `provider.api_key_env`).
    #[arg(long, global = true, env = "LEARNIX_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,
}

impl ConfigOverrides {
    /// Overwrite `config` with every value given on the command line.
    pub fn apply(&self, config: &mut LearnixConfig) {
        if let Some(provider) = self.provider {
            config.provider.provider_type = provider;
        }
        if let Some(model) = &self.model {
            config.provider.model = model.clone();
        }
        if let Some(base_url) = &self.base_url {
            config.provider.base_url = Some(base_url.clone());
        }
        if let Some(n) = self.context_turns {
            config.context_turns = n;
        }
        if let Some(m) = self.display_turns {
            config.display_turns = m;
        }
    }

    /// The API key given on the command line or via `LEARNIX_API_KEY`.
    pub fn api_key(&self) -> Option<SecretString> {
        self.api_key
            .as_deref()
            .filter(|key| !key.trim().is_empty())
            .map(|key| SecretString::from(key.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_ask_with_overrides() {
        let cli = Cli::try_parse_from([
            "learnix",
            "--provider",
            "echo",
            "--context-turns",
            "5",
            "ask",
            "hello there",
        ])
        .unwrap();

        assert!(matches!(cli.command, Commands::Ask { ref message } if message == "hello there"));
        assert_eq!(cli.overrides.provider, Some(ProviderType::Echo));
        assert_eq!(cli.overrides.context_turns, Some(5));
    }

    #[test]
    fn test_parse_advice_topic() {
        let cli = Cli::try_parse_from(["learnix", "advice", "career"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Advice {
                topic: Some(AdviceTopic::CareerGuidance)
            }
        ));
    }

    #[test]
    fn test_parse_unknown_advice_topic_fails() {
        assert!(Cli::try_parse_from(["learnix", "advice", "cooking"]).is_err());
    }

    #[test]
    fn test_apply_overrides() {
        let overrides = ConfigOverrides {
            provider: Some(ProviderType::OpenAiCompatible),
            model: Some("local-model".to_string()),
            base_url: Some("http://localhost:8080/v1".to_string()),
            context_turns: Some(4),
            display_turns: Some(8),
            api_key: None,
        };
        let mut config = LearnixConfig::default();
        overrides.apply(&mut config);

        assert_eq!(config.provider.provider_type, ProviderType::OpenAiCompatible);
        assert_eq!(config.provider.model, "local-model");
        assert_eq!(config.provider.base_url.as_deref(), Some("http://localhost:8080/v1"));
        assert_eq!(config.context_turns, 4);
        assert_eq!(config.display_turns, 8);
    }

    #[test]
    fn test_blank_api_key_ignored() {
        let overrides = ConfigOverrides {
            api_key: Some("   ".to_string()),
            ..ConfigOverrides::default()
        };
        assert!(overrides.api_key().is_none());
    }

    #[test]
    fn test_log_filter_levels() {
        let cli = Cli::try_parse_from(["learnix", "-v", "chat"]).unwrap();
        assert_eq!(cli.log_filter(), "info,learnix=debug");
        let cli = Cli::try_parse_from(["learnix", "--quiet", "chat"]).unwrap();
        assert_eq!(cli.log_filter(), "error");
    }
}
