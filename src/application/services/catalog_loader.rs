//! Catalog Loader - Fetches the entity list and the card lookup table
//!
//! The entity list is a hard dependency: if it cannot be read or parsed the
//! whole catalog fails. The lookup table is soft: any failure is logged and
//! an empty table is used instead.

use std::collections::HashSet;
use std::sync::Arc;

use futures_util::future;
use tracing::{info, instrument, warn};

use crate::application::ports::outbound::{CatalogSourceError, CatalogSourcePort};
use crate::domain::entities::{CardLookupTable, Creature};

/// Message shown in place of the grid when the catalog cannot be loaded
pub const CATALOG_ERROR_MESSAGE: &str = "Error loading Pokemon data";

/// Errors that make the catalog unusable
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error(transparent)]
    Source(#[from] CatalogSourceError),

    #[error("Creature at index {index} has an empty name")]
    EmptyName { index: usize },

    #[error("Catalog number {number} appears more than once")]
    DuplicateNumber { number: u32 },
}

/// The loaded, immutable catalog
#[derive(Debug, Clone)]
pub struct LoadedCatalog {
    pub creatures: Vec<Creature>,
    pub lookup: Arc<CardLookupTable>,
}

pub struct CatalogLoader<C: CatalogSourcePort> {
    source: Arc<C>,
}

impl<C: CatalogSourcePort> CatalogLoader<C> {
    pub fn new(source: Arc<C>) -> Self {
        Self { source }
    }

    /// Load both documents concurrently
    #[instrument(skip(self))]
    pub async fn load(&self) -> Result<LoadedCatalog, CatalogError> {
        let (creatures, lookup) = future::join(
            self.source.load_creatures(),
            self.source.load_card_lookup(),
        )
        .await;

        let creatures = creatures?;
        validate_creatures(&creatures)?;

        let lookup = lookup.unwrap_or_else(|e| {
            warn!("Card data not available: {}", e);
            CardLookupTable::empty()
        });

        info!(
            creatures = creatures.len(),
            lookup_entries = lookup.len(),
            "Catalog loaded"
        );

        Ok(LoadedCatalog {
            creatures,
            lookup: Arc::new(lookup),
        })
    }
}

fn validate_creatures(creatures: &[Creature]) -> Result<(), CatalogError> {
    let mut seen = HashSet::new();
    for (index, creature) in creatures.iter().enumerate() {
        if creature.name.trim().is_empty() {
            return Err(CatalogError::EmptyName { index });
        }
        if !seen.insert(creature.number) {
            return Err(CatalogError::DuplicateNumber {
                number: creature.number.value(),
            });
        }
    }
    Ok(())
}
