//! `learnix config` -- show the effective configuration.

use anyhow::Result;
use clap::Subcommand;
use console::style;

use learnix_infra::config::{config_path, render_config};

use crate::state::AppState;

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Print the effective configuration (file plus overrides) as TOML.
    Show,
    /// Print the path of the configuration file.
    Path,
}

pub fn handle_config_command(cmd: ConfigCommand, state: &AppState, json: bool) -> Result<()> {
    match cmd {
        ConfigCommand::Show => {
            if json {
                println!("{}", serde_json::to_string_pretty(state.config.as_ref())?);
            } else {
                print!("{}", render_config(&state.config)?);
            }
        }
        ConfigCommand::Path => {
            let path = config_path(&state.data_dir);
            if json {
                let exists = path.exists();
                println!(
                    "{}",
                    serde_json::json!({ "path": path.display().to_string(), "exists": exists })
                );
            } else if path.exists() {
                println!("{}", path.display());
            } else {
                println!(
                    "{} {}",
                    path.display(),
                    style("(not created, defaults in use)").dim()
                );
            }
        }
    }
    Ok(())
}
