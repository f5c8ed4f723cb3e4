//! Shared application state

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::application::services::CatalogPageService;
use crate::infrastructure::card_search::CardSearchClient;
use crate::infrastructure::catalog_files::FileCatalogSource;
use crate::infrastructure::config::AppConfig;
use crate::infrastructure::page_registry::PageRegistry;

pub type PageService = CatalogPageService<FileCatalogSource, CardSearchClient>;

/// Shared application state
pub struct AppState {
    pub config: AppConfig,
    /// Open catalog pages
    pub pages: Arc<RwLock<PageRegistry>>,
    pub page_service: PageService,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        let catalog_source = Arc::new(FileCatalogSource::new(config.data_dir.clone()));
        let card_search = Arc::new(CardSearchClient::new(&config.card_search_base_url));
        let page_service = CatalogPageService::new(catalog_source, card_search);

        Self {
            config,
            pages: Arc::new(RwLock::new(PageRegistry::new())),
            page_service,
        }
    }
}
