//! Main entry point for the blog backend.
//!
//! This file parses the command line, initializes tracing, loads the
//! configuration and runs the axum server until shutdown.

use blog_backend::config::AppConfig;
use blog_backend::errors::{AppError, AppResult};
use blog_backend::server::Server;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Blog backend daemon
#[derive(Parser)]
#[command(name = "blogd")]
#[command(about = "Blog backend with token-scoped authorship", long_about = None)]
#[command(version)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, env = "BLOG_CONFIG")]
    config: Option<String>,

    /// Listen address, overrides the configuration file
    #[arg(short, long, env = "BLOG_LISTEN_ADDR")]
    listen: Option<String>,

    /// Token signing secret, overrides BLOG_AUTH__SECRET
    #[arg(long, env = "BLOG_SECRET", hide_env_values = true)]
    secret: Option<String>,

    /// Log level
    #[arg(long, env = "BLOG_LOG_LEVEL")]
    log_level: Option<String>,

    /// Enable JSON logging
    #[arg(long, env = "BLOG_LOG_JSON")]
    json: bool,
}

#[tokio::main]
async fn main() -> AppResult<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::load(cli.config.as_deref())?;

    if let Some(listen) = cli.listen {
        config.server.listen_addr = listen
            .parse()
            .map_err(|e| AppError::Config(format!("Invalid listen address: {}", e)))?;
    }
    if let Some(secret) = cli.secret {
        config.auth.secret = secret;
    }
    if let Some(level) = cli.log_level {
        config.logging.level = level;
    }
    config.logging.json |= cli.json;

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

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        listen = %config.server.listen_addr,
        "Starting blog backend"
    );

    let server = Server::new(config)?;
    server.run().await
}
