//! Catalog Page Service - Page lifecycle and card interactions
//!
//! Opening a page loads the catalog and composes the grid. Flipping a card
//! into its back face for the first time fires the card resolution in the
//! background; the flip itself never waits for it.

use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, info, instrument};

use crate::application::ports::outbound::{CardSearchPort, CatalogSourcePort};
use crate::application::services::card_enrichment_service::CardEnrichmentService;
use crate::application::services::card_renderer::{CardSnapshot, CardView};
use crate::application::services::catalog_loader::CatalogLoader;
use crate::application::services::grid_composer::{CatalogGrid, CatalogPage, GridComposer};
use crate::application::services::sprite_resolver::SpriteLoadOutcome;
use crate::domain::value_objects::{DexNumber, FlipState, PageId, SpriteVisualState};

/// Errors that can occur while interacting with a page
#[derive(Debug, thiserror::Error)]
pub enum PageError {
    #[error("Page not found: {0}")]
    PageNotFound(PageId),

    #[error("Card not found: {0}")]
    CardNotFound(u32),
}

/// Point-in-time view of a whole page
#[derive(Debug, Clone, Serialize)]
pub struct PageSnapshot {
    pub page_id: PageId,
    pub cards: Vec<CardSnapshot>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Result of reporting a sprite load failure
#[derive(Debug, Clone, Serialize)]
pub struct SpriteFailureResult {
    pub outcome: SpriteLoadOutcome,
    pub card: CardSnapshot,
}

pub struct CatalogPageService<C: CatalogSourcePort, S: CardSearchPort> {
    loader: CatalogLoader<C>,
    enrichment: Arc<CardEnrichmentService<S>>,
}

impl<C, S> CatalogPageService<C, S>
where
    C: CatalogSourcePort,
    S: CardSearchPort + 'static,
{
    pub fn new(source: Arc<C>, search: Arc<S>) -> Self {
        Self {
            loader: CatalogLoader::new(source),
            enrichment: Arc::new(CardEnrichmentService::new(search)),
        }
    }

    /// Load the catalog and build a fresh page
    #[instrument(skip(self))]
    pub async fn open_page(&self) -> CatalogPage {
        let page = GridComposer::compose(self.loader.load().await);
        info!(page_id = %page.id, cards = page.grid.card_count(), "Opened catalog page");
        page
    }

    pub async fn page_snapshot(&self, page: &CatalogPage) -> PageSnapshot {
        match &page.grid {
            CatalogGrid::Cards(grid) => {
                let mut cards = Vec::with_capacity(grid.len());
                for card in grid.cards() {
                    cards.push(card.snapshot().await);
                }
                PageSnapshot {
                    page_id: page.id,
                    cards,
                    error: None,
                }
            }
            CatalogGrid::Failed { message } => PageSnapshot {
                page_id: page.id,
                cards: Vec::new(),
                error: Some(message.clone()),
            },
        }
    }

    pub async fn card_snapshot(
        &self,
        page: &CatalogPage,
        number: DexNumber,
    ) -> Result<CardSnapshot, PageError> {
        Ok(find_card(page, number)?.snapshot().await)
    }

    /// Flip a card; the first flip to the back face starts its resolution
    #[instrument(skip(self, page), fields(page_id = %page.id))]
    pub async fn flip(
        &self,
        page: &CatalogPage,
        number: DexNumber,
    ) -> Result<CardSnapshot, PageError> {
        let card = find_card(page, number)?;

        if card.toggle_flip().await == FlipState::Flipped && card.back().try_begin().await {
            self.spawn_enrichment(card.clone(), page);
        }

        Ok(card.snapshot().await)
    }

    /// The browser reports that the current sprite URL failed to load
    pub async fn sprite_failed(
        &self,
        page: &CatalogPage,
        number: DexNumber,
        attempt: SpriteVisualState,
    ) -> Result<SpriteFailureResult, PageError> {
        let card = find_card(page, number)?;
        let outcome = card.sprite_failed(attempt).await;
        Ok(SpriteFailureResult {
            outcome,
            card: card.snapshot().await,
        })
    }

    /// The browser reports that the resolved card image failed to load
    pub async fn card_image_failed(
        &self,
        page: &CatalogPage,
        number: DexNumber,
    ) -> Result<CardSnapshot, PageError> {
        let card = find_card(page, number)?;
        card.card_image_failed().await;
        Ok(card.snapshot().await)
    }

    fn spawn_enrichment(&self, card: Arc<CardView>, page: &CatalogPage) {
        let enrichment = self.enrichment.clone();
        let lookup = page.lookup.clone();
        debug!(number = %card.number(), "Starting card resolution");

        // Not tracked: if the page goes away the result lands on a card nobody reads
        tokio::spawn(async move {
            enrichment
                .enrich(card.creature(), &lookup, card.back())
                .await;
        });
    }
}

fn find_card(page: &CatalogPage, number: DexNumber) -> Result<&Arc<CardView>, PageError> {
    page.grid
        .card(number)
        .ok_or(PageError::CardNotFound(number.value()))
}
