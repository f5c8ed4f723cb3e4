//! Cardex Engine - Creature catalog served as flip cards
//!
//! The Engine is the backend server that:
//! - Loads the creature list and the local card lookup table
//! - Serves the catalog page and the sprite files
//! - Resolves back-face card images on first flip, from the lookup table or
//!   the remote card search API

mod application;
mod domain;
mod infrastructure;

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::infrastructure::config::AppConfig;
use crate::infrastructure::http;
use crate::infrastructure::page_workers::page_cleanup_worker;
use crate::infrastructure::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cardex_engine=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Cardex Engine");

    // Load configuration
    let config = AppConfig::from_env()?;
    tracing::info!("Configuration loaded");
    tracing::info!("  Data: {}", config.data_dir.display());
    tracing::info!("  Sprites: {}", config.sprites_dir.display());
    tracing::info!("  Card search: {}", config.card_search_base_url);

    let server_port = config.server_port;
    let retention = config.page_retention();

    let state = Arc::new(AppState::new(config));
    tracing::info!("Application state initialized");

    let cleanup_worker = {
        let pages = state.pages.clone();
        tokio::spawn(async move {
            page_cleanup_worker(pages, retention, Duration::from_secs(60)).await;
        })
    };

    let app = http::build_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], server_port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;

    let server = axum::serve(listener, app);

    tokio::select! {
        result = server => {
            if let Err(e) = result {
                tracing::error!("Server error: {}", e);
            }
        }
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Shutdown signal received, stopping workers...");
            cleanup_worker.abort();
            tracing::info!("Workers stopped");
        }
    }

    Ok(())
}
