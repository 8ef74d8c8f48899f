//! Student record query API.
//!
//! # Architecture Overview
//!
//! ```text
//!     Client Request          ┌──────────────────────────────────────────────┐
//!     ────────────────────────┼─▶ http::server (request id, trace, timeout)  │
//!                             │        │                                     │
//!                             │        ▼                                     │
//!                             │   http::handlers ──▶ records::source ────────┼──▶ okulno*.csv
//!                             │        │              (loader, cache)        │
//!                             │        ▼                                     │
//!     Client Response         │   query::search (AND of containment tests)  │
//!     ◀───────────────────────┼── http::response (JSON envelope)            │
//!                             └──────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use okulno_api::config::{load_config, validate_config, ConfigError, ServiceConfig};
use okulno_api::lifecycle::{signals, Shutdown};
use okulno_api::observability::{logging, metrics};
use okulno_api::HttpServer;

#[derive(Parser)]
#[command(name = "okulno-api", version)]
#[command(about = "Read-only HTTP query API over student record CSV files", long_about = None)]
struct Args {
    /// TOML configuration file; defaults apply when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override `listener.bind_address`.
    #[arg(short, long)]
    bind: Option<String>,

    /// Override `data.directory`.
    #[arg(short, long)]
    data_dir: Option<String>,
}

fn resolve_config(args: &Args) -> Result<ServiceConfig, ConfigError> {
    let mut config = match &args.config {
        Some(path) => load_config(path)?,
        None => ServiceConfig::default(),
    };

    if let Some(bind) = &args.bind {
        config.listener.bind_address = bind.clone();
    }
    if let Some(dir) = &args.data_dir {
        config.data.directory = dir.clone();
    }

    validate_config(&config).map_err(ConfigError::Validation)?;
    Ok(config)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let config = resolve_config(&args)?;

    logging::init(&config.observability.log_level);

    tracing::info!("okulno-api v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        channel = %config.channel.channel,
        founder = %config.channel.founder,
        api = %config.channel.api,
        "Channel metadata"
    );
    tracing::info!(
        bind_address = %config.listener.bind_address,
        query_path = %config.api.query_path,
        data_directory = %config.data.directory,
        file_prefix = %config.data.file_prefix,
        cache_enabled = config.data.cache_enabled,
        request_timeout_secs = config.timeouts.request_secs,
        "Configuration loaded"
    );
    for example in ["ad=GAZAL", "tc=19007791262", "soyad=YILMAZ", "okulno=776", "durum=Mezun"] {
        tracing::debug!("Example: {}?{}", config.api.query_path, example);
    }

    if config.observability.metrics_enabled {
        match config.observability.metrics_address.parse() {
            Ok(addr) => metrics::init_metrics(addr),
            Err(_) => tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            ),
        }
    }

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    let shutdown = Shutdown::new();
    signals::trigger_on_signal(shutdown.clone());

    let server = HttpServer::new(config);
    server.run(listener, shutdown.wait()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
