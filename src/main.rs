//! Beer catalog proxy.
//!
//! # Architecture Overview
//!
//! ```text
//!   GET /beers
//!       │
//!       ▼
//!   http::server → http::handlers
//!       │
//!       ▼
//!   catalog::validator ───(400)──────────────▶ error body
//!       │
//!       ▼
//!   upstream::client ─── GET /beers/<type> ──▶ upstream
//!       │
//!       ▼
//!   catalog::envelope ──(upstream status)───▶ envelope passthrough
//!   catalog::decode ────(500)────────────────▶ error body
//!   catalog::sort
//!       │
//!       ▼
//!   http::response ─────────────────────────▶ JSON array
//! ```

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use beer_proxy::config::resolve_config;
use beer_proxy::lifecycle::signals::watch_signals;
use beer_proxy::observability::{logging, metrics};
use beer_proxy::{HttpServer, Shutdown};

#[derive(Parser)]
#[command(name = "beer-proxy", version, about = "Beer catalog proxy")]
struct Args {
    /// Path to a TOML configuration file.
    #[arg(short, long, env = "BEER_PROXY_CONFIG")]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let port = std::env::var("PORT").ok();
    let config = resolve_config(args.config.as_deref(), port.as_deref())?;

    logging::init_logging(&config.observability);

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        bind_address = %config.listener.bind_address,
        upstream = %config.upstream.base_url,
        upstream_timeout_secs = config.upstream.timeout_secs,
        request_timeout_secs = config.timeouts.request_secs,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        // Address was checked by config validation.
        match config.observability.metrics_address.parse() {
            Ok(addr) => metrics::init_metrics(addr),
            Err(e) => tracing::error!(error = %e, "Failed to parse metrics address"),
        }
    }

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    let shutdown = Shutdown::new();
    tokio::spawn(watch_signals(shutdown.clone()));

    let server = HttpServer::new(config)?;
    server.run(listener, shutdown.subscribe()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
