//! Popsim - REST server entry point
//!
//! Loads configuration, restores the snapshot if one exists, and serves the
//! population API until interrupted.

use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;
use popsim::core::config::{self, AppConfig};
use popsim::core::error::{PopError, Result};
use popsim::http::{self, AppState};
use popsim::store::MemoryStore;
use tracing_subscriber::EnvFilter;

/// Synthetic population simulator
#[derive(Parser, Debug)]
#[command(name = "popsim")]
#[command(about = "Serve the population, generation and polling API")]
struct Args {
    /// TOML config file (defaults apply for anything it leaves out)
    #[arg(long, short = 'c')]
    config: Option<PathBuf>,

    /// Address to bind, overriding the config
    #[arg(long)]
    bind: Option<String>,

    /// Snapshot file loaded at startup and written on shutdown
    #[arg(long)]
    snapshot: Option<PathBuf>,

    /// Random seed for reproducible generation
    #[arg(long)]
    seed: Option<u64>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("popsim=info")),
        )
        .init();

    let args = Args::parse();

    let mut app_config = match &args.config {
        Some(path) => AppConfig::load(path)?,
        None => AppConfig::default(),
    };
    if let Some(bind) = args.bind {
        app_config.server.bind = bind;
    }
    if let Some(path) = args.snapshot {
        app_config.server.snapshot_path = Some(path);
    }
    if args.seed.is_some() {
        app_config.generator.seed = args.seed;
    }
    app_config.validate()?;

    let addr: SocketAddr = app_config.server.bind.parse().map_err(|e| {
        PopError::InvalidInput(format!("bad bind address '{}': {}", app_config.server.bind, e))
    })?;

    let store = match &app_config.server.snapshot_path {
        Some(path) if path.exists() => {
            tracing::info!("Loading snapshot from {}", path.display());
            MemoryStore::load_snapshot(path, app_config.catalog.clone())?
        }
        _ => MemoryStore::with_catalog(app_config.catalog.clone()),
    };

    if config::set_config(app_config.clone()).is_err() {
        tracing::warn!("Global config was already initialised");
    }

    tracing::info!(
        "Popsim starting: {} places, {} pops",
        store.place_count(),
        store.pop_count()
    );

    http::serve(addr, AppState::new(app_config, store)).await
}
