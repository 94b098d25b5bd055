//! tutor-bot binary: `run` starts the Telegram bot, `check` probes the backend.

use anyhow::Result;
use backend_client::BackendClient;
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use tutor_bot::{create_backend_client, load_backend_config, load_config, run_bot, Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run { token } => {
            let config = load_config(token)?;
            run_bot(config).await
        }
        Commands::Check => handle_check().await,
    }
}

/// One health probe against BACKEND_URL; exit status reflects the outcome.
async fn handle_check() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = load_backend_config()?;
    let client = create_backend_client(&config)?;

    match client.health().await {
        Ok(()) => {
            info!(backend_url = %config.backend_url, "backend healthy");
            println!("Backend at {} is healthy", config.backend_url);
            Ok(())
        }
        Err(e) => {
            error!(error = %e, backend_url = %config.backend_url, "backend health check failed");
            anyhow::bail!("backend at {} is unavailable: {}", config.backend_url, e)
        }
    }
}
