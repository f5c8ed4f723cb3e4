//! Application configuration

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};

/// Application configuration loaded from environment
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Directory holding `pokemon.json` and `cards.json`
    pub data_dir: PathBuf,
    /// Directory served under `/sprites`
    pub sprites_dir: PathBuf,

    /// Remote card search endpoint
    pub card_search_base_url: String,

    /// Idle pages older than this are dropped
    pub page_retention_minutes: u64,

    /// HTTP server port
    pub server_port: u16,
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            data_dir: env::var("CARDEX_DATA_DIR")
                .unwrap_or_else(|_| "data".to_string())
                .into(),
            sprites_dir: env::var("CARDEX_SPRITES_DIR")
                .unwrap_or_else(|_| "sprites".to_string())
                .into(),

            card_search_base_url: env::var("CARD_SEARCH_BASE_URL")
                .unwrap_or_else(|_| "https://api.pokemontcg.io/v2/cards".to_string()),

            page_retention_minutes: env::var("PAGE_RETENTION_MINUTES")
                .unwrap_or_else(|_| "60".to_string())
                .parse()
                .context("PAGE_RETENTION_MINUTES must be a whole number of minutes")?,

            server_port: env::var("SERVER_PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .context("SERVER_PORT must be a valid port number")?,
        })
    }

    /// Idle time after which a page is dropped
    pub fn page_retention(&self) -> Duration {
        Duration::from_secs(self.page_retention_minutes.saturating_mul(60))
    }
}
