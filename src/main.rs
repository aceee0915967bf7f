use anyhow::{Context, Result};
use clap::Parser;
use cv_console::cli::{handle_console_command, ConsoleCli};
use std::fs::OpenOptions;
use std::sync::Mutex;

use tracing::info;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

const DEFAULT_LOG_FILTER: &str = "cv_console=info,rocket::server=off";

#[tokio::main]
async fn main() -> Result<()> {
    let cli = ConsoleCli::parse();
    let config = cli.resolve_config()?;

    // JSON file output only when a log file is configured
    let file_layer = match &config.server.log_file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .write(true)
                .truncate(true) // Clear file on startup
                .open(path)
                .with_context(|| format!("Failed to open log file {}", path.display()))?;
            Some(
                fmt::layer()
                    .json()
                    .with_writer(Mutex::new(file))
                    .with_current_span(false)
                    .with_span_list(false),
            )
        }
        None => None,
    };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .with(file_layer)
        .with(filter)
        .init();

    info!("Environment: {}", config.environment);
    info!("Matching API: {}", config.api.base_url);

    handle_console_command(cli, config).await
}
