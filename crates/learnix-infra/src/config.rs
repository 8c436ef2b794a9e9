//! Configuration loader for Learnix.
//!
//! Reads `config.toml` from the data directory (`~/.learnix/` by default)
//! and deserializes it into [`LearnixConfig`]. [`load_config`] falls back to
//! defaults when the file is missing or malformed; [`try_load_config`]
//! reports the problem instead.

use std::path::{Path, PathBuf};

use learnix_types::config::LearnixConfig;
use learnix_types::error::ConfigError;

/// File name of the configuration file inside the data directory.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Environment variable that overrides the data directory.
pub const DATA_DIR_ENV: &str = "LEARNIX_HOME";

/// Resolve the data directory from environment or platform defaults.
///
/// Priority:
/// 1. `LEARNIX_HOME` environment variable
/// 2. `~/.learnix`
/// 3. `.learnix` in the current directory
pub fn resolve_data_dir() -> PathBuf {
    if let Ok(dir) = std::env::var(DATA_DIR_ENV) {
        if !dir.trim().is_empty() {
            return PathBuf::from(dir);
        }
    }

    if let Some(home) = dirs::home_dir() {
        return home.join(".learnix");
    }

    PathBuf::from(".learnix")
}

/// Path of the configuration file for `data_dir`.
pub fn config_path(data_dir: &Path) -> PathBuf {
    data_dir.join(CONFIG_FILE_NAME)
}

/// Load configuration from `{data_dir}/config.toml`, strictly.
///
/// A missing file yields the defaults. An unreadable, malformed, or invalid
/// file is an error.
pub async fn try_load_config(data_dir: &Path) -> Result<LearnixConfig, ConfigError> {
    let path = config_path(data_dir);

    let content = match tokio::fs::read_to_string(&path).await {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("No config.toml found at {}, using defaults", path.display());
            return Ok(LearnixConfig::default());
        }
        Err(err) => {
            return Err(ConfigError::Read {
                path: path.display().to_string(),
                reason: err.to_string(),
            });
        }
    };

    let config = toml::from_str::<LearnixConfig>(&content).map_err(|err| ConfigError::Parse {
        path: path.display().to_string(),
        reason: err.to_string(),
    })?;
    config.validate()?;
    Ok(config)
}

/// Load configuration from `{data_dir}/config.toml`.
///
/// - If the file does not exist, returns [`LearnixConfig::default()`].
/// - If the file cannot be read, parsed, or validated, logs a warning and
///   returns the default.
pub async fn load_config(data_dir: &Path) -> LearnixConfig {
    match try_load_config(data_dir).await {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!("{err}, using defaults");
            LearnixConfig::default()
        }
    }
}

/// Render a configuration as TOML, as it would appear in `config.toml`.
pub fn render_config(config: &LearnixConfig) -> Result<String, ConfigError> {
    toml::to_string_pretty(config).map_err(|err| ConfigError::Invalid(err.to_string()))
}
