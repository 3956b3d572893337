//! Vigil gateway daemon
//!
//! Serves `/analyze`, `/phishing`, `/security` and `/test`.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use vigil_gateway::{GatewayConfig, GatewayError, GatewayResult, Server};

/// Vigil gateway CLI
#[derive(Parser)]
#[command(name = "vigild")]
#[command(about = "Vigil - emotion, phishing and security classification gateway", long_about = None)]
#[command(version)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, env = "VIGIL_CONFIG")]
    config: Option<String>,

    /// Listen address, overrides the configuration file
    #[arg(short, long, env = "VIGIL_LISTEN_ADDR")]
    listen: Option<String>,

    /// Log level, overrides the configuration file
    #[arg(long, env = "VIGIL_LOG_LEVEL")]
    log_level: Option<String>,

    /// Enable JSON logging
    #[arg(long, env = "VIGIL_LOG_JSON")]
    json: bool,
}

#[tokio::main]
async fn main() -> GatewayResult<()> {
    let cli = Cli::parse();

    let mut config = GatewayConfig::load(cli.config.as_deref())?;

    if let Some(listen) = cli.listen.as_deref() {
        config.server.listen_addr = listen
            .parse()
            .map_err(|e| GatewayError::Config(format!("Invalid listen address: {}", e)))?;
    }
    if let Some(level) = cli.log_level {
        config.logging.level = level;
    }
    config.logging.json |= cli.json;

    // Initialize tracing
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| config.logging.level.clone().into());

    if config.logging.json {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }

    tracing::debug!(?config, "configuration loaded");

    Server::new(config).run().await
}
