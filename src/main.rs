//! Songbook - a REST service for a song catalog.
//!
//! Songs are stored in a single SQLite table. Creation enriches the song
//! with release date, lyrics, and a link fetched from an external music
//! info API; lyrics can be read back page by page, split into verses.

pub mod api;
pub mod config;
pub mod db;
pub mod error;
pub mod metadata;
pub mod model;
pub mod service;

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Command-line arguments.
#[derive(Debug, Parser)]
#[command(name = "songbook", version, about = "REST service for a song catalog")]
struct Cli {
    /// Path to the TOML config file
    #[arg(long, env = "SONGBOOK_CONFIG", default_value = config::DEFAULT_CONFIG_PATH)]
    config: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Cli::parse();

    // Initialize logging
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true))
        .with(EnvFilter::from_default_env().add_directive("songbook=info".parse()?))
        .init();

    let cfg = config::load(&args.config);

    // Connect to the database and run migrations
    let pool = db::init_db(&cfg.database.url).await?;

    // Wire up components
    let metadata = metadata::MetadataClient::new(cfg.metadata.base_url.clone());
    let service = Arc::new(service::SongService::new(pool, metadata));
    let app = api::router(service);

    // Start the server
    let listener = tokio::net::TcpListener::bind(&cfg.server.bind).await?;
    tracing::info!("Starting server on {}", cfg.server.bind);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Resolve when the process receives Ctrl-C.
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
}
