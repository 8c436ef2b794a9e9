//! `learnix provider` -- inspect and test the configured model backend.

use std::io::Write;
use std::time::Instant;

use anyhow::Result;
use clap::Subcommand;
use console::style;

use learnix_core::llm::decode::strip_special_tokens;
use learnix_infra::llm::test_provider_connection;

use crate::state::AppState;

#[derive(Subcommand)]
pub enum ProviderCommand {
    /// Show the configured backend.
    Show,
    /// Send a short test prompt to the backend.
    Check,
}

pub async fn handle_provider_command(
    cmd: ProviderCommand,
    state: &AppState,
    json: bool,
) -> Result<()> {
    match cmd {
        ProviderCommand::Show => provider_show(state, json),
        ProviderCommand::Check => provider_check(state, json).await,
    }
}

fn provider_show(state: &AppState, json: bool) -> Result<()> {
    let provider = &state.config.provider;
    if json {
        println!("{}", serde_json::to_string_pretty(provider)?);
        return Ok(());
    }

    println!();
    println!("  {}  {}", style("Backend:").bold(), provider.provider_type);
    println!("  {}    {}", style("Model:").bold(), provider.model);
    println!(
        "  {} {}",
        style("Base URL:").bold(),
        provider.base_url.as_deref().unwrap_or("(default)")
    );
    println!(
        "  {}  {}",
        style("Key env:").bold(),
        provider.api_key_env.as_deref().unwrap_or("(none)")
    );
    println!();
    Ok(())
}

async fn provider_check(state: &AppState, json: bool) -> Result<()> {
    let name = state.engine.generator_name().to_string();
    if !json {
        print!("  Testing {} ... ", style(&name).cyan());
        let _ = std::io::stdout().flush();
    }

    let start = Instant::now();
    let result = test_provider_connection(state.engine.generator()).await;
    let elapsed_ms = start.elapsed().as_millis() as u64;

    match result {
        Ok(reply) => {
            if json {
                println!(
                    "{}",
                    serde_json::json!({
                        "provider": name,
                        "ok": true,
                        "latency_ms": elapsed_ms,
                        "reply": strip_special_tokens(&reply),
                    })
                );
            } else {
                println!("{} ({elapsed_ms}ms)", style("connected").green().bold());
            }
            Ok(())
        }
        Err(e) => {
            if json {
                println!(
                    "{}",
                    serde_json::json!({ "provider": name, "ok": false, "error": e.to_string() })
                );
            } else {
                println!("{}", style("failed").red().bold());
            }
            Err(anyhow::anyhow!("backend check failed: {e}"))
        }
    }
}
