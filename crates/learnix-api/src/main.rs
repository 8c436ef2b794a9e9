//! Learnix CLI and REST API entry point.
//!
//! Binary name: `learnix`
//!
//! Parses CLI arguments, loads configuration and the model backend, then
//! dispatches to the terminal chat, a one-shot question, or the HTTP server.

mod cli;
mod http;
mod state;

use clap::Parser;
use clap_complete::generate;

use learnix_observe::tracing_setup::{init_tracing, shutdown_tracing};

use cli::{Cli, Commands};
use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.otel, cli.log_filter())
        .map_err(|e| anyhow::anyhow!("failed to initialize tracing: {e}"))?;

    let result = run(cli).await;
    shutdown_tracing();
    result
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    // Neither completions nor advice need a backend.
    match &cli.command {
        Commands::Completions { shell } => {
            let mut cmd = <Cli as clap::CommandFactory>::command();
            generate(*shell, &mut cmd, "learnix", &mut std::io::stdout());
            return Ok(());
        }
        Commands::Advice { topic } => return cli::advice::show_advice(*topic, cli.json),
        _ => {}
    }

    let state = AppState::init(&cli.overrides).await?;

    match cli.command {
        Commands::Serve { port, host } => {
            let host = host.unwrap_or_else(|| state.config.server.host.clone());
            let port = port.unwrap_or(state.config.server.port);
            let addr = format!("{host}:{port}");
            let listener = tokio::net::TcpListener::bind(&addr).await?;

            tracing::info!(
                addr = %addr,
                backend = state.engine.generator_name(),
                "Learnix server started"
            );
            println!(
                "  {} Learnix listening on {}",
                console::style("⚡").bold(),
                console::style(format!("http://{addr}")).cyan()
            );
            println!("  {}", console::style("Press Ctrl+C to stop").dim());

            let sweeper = state.spawn_session_sweeper();
            let router = http::router::build_router(state);

            let served = axum::serve(listener, router)
                .with_graceful_shutdown(shutdown_signal())
                .await;
            sweeper.abort();
            served?;

            println!("\n  Server stopped.");
        }

        Commands::Chat => cli::chat::loop_runner::run_chat_loop(&state).await?,

        Commands::Ask { message } => cli::ask::ask(&state, &message, cli.json).await?,

        Commands::Provider { action } => {
            cli::provider::handle_provider_command(action, &state, cli.json).await?;
        }

        Commands::Config { action } => cli::config::handle_config_command(action, &state, cli.json)?,

        Commands::Completions { .. } | Commands::Advice { .. } => unreachable!("handled above"),
    }

    Ok(())
}

/// Wait for Ctrl+C or SIGTERM for graceful shutdown.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
