//! loadgen: greeting, health and CPU-load HTTP service.
//!
//! This is the application entry point. It parses command line arguments,
//! resolves configuration, initializes tracing, captures the host identity,
//! and serves the Axum router until the process is stopped.

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use loadgen::config::{AppConfig, LoggingConfig, Overrides, DEFAULT_LOG_FILTER};
use loadgen::http::start_server;
use loadgen::{create_router, AppState, Identity};

/// Greeting, health and CPU-load HTTP service
#[derive(Parser, Debug)]
#[command(name = "loadgen", version, about)]
struct Args {
    /// Optional TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Address to bind (overrides http.host)
    #[arg(long)]
    host: Option<String>,

    /// Port to listen on (overrides http.port)
    #[arg(short, long, env = "PORT")]
    port: Option<u16>,

    /// Log level filter (e.g., "loadgen=debug,tower_http=info")
    #[arg(short, long)]
    log_level: Option<String>,
}

fn init_tracing(log_filter: &str, logging: &LoggingConfig) {
    let filter = tracing_subscriber::EnvFilter::new(log_filter);
    let registry = tracing_subscriber::registry().with(filter);

    if logging.is_json() {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config = AppConfig::resolve(
        args.config.as_deref(),
        Overrides {
            host: args.host,
            port: args.port,
        },
    )?;

    // Priority: CLI > env > default
    let log_filter = args
        .log_level
        .or_else(|| std::env::var("RUST_LOG").ok())
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());
    init_tracing(&log_filter, &config.logging);

    let identity = Identity::from_config(&config);
    tracing::info!(
        hostname = %identity.hostname,
        service = identity.service,
        version = identity.version,
        "Resolved service identity"
    );

    let app = create_router(AppState::new(identity));
    start_server(app, &config).await?;

    Ok(())
}
