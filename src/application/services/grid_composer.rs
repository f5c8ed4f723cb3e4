//! Grid Composer - Builds one card per creature for a catalog page

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::application::services::card_renderer::CardView;
use crate::application::services::catalog_loader::{
    CatalogError, LoadedCatalog, CATALOG_ERROR_MESSAGE,
};
use crate::domain::entities::{CardLookupTable, Creature};
use crate::domain::value_objects::{DexNumber, PageId};

/// Cards of a loaded catalog, in entity list order
#[derive(Debug)]
pub struct CardGrid {
    cards: Vec<Arc<CardView>>,
    by_number: HashMap<DexNumber, usize>,
}

impl CardGrid {
    pub fn cards(&self) -> &[Arc<CardView>] {
        &self.cards
    }

    pub fn card(&self, number: DexNumber) -> Option<&Arc<CardView>> {
        self.by_number.get(&number).map(|&index| &self.cards[index])
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }
}

/// Contents of a catalog page: either every card, or only the error message
#[derive(Debug)]
pub enum CatalogGrid {
    Cards(CardGrid),
    Failed { message: String },
}

impl CatalogGrid {
    pub fn card(&self, number: DexNumber) -> Option<&Arc<CardView>> {
        match self {
            Self::Cards(grid) => grid.card(number),
            Self::Failed { .. } => None,
        }
    }

    pub fn card_count(&self) -> usize {
        match self {
            Self::Cards(grid) => grid.len(),
            Self::Failed { .. } => 0,
        }
    }
}

/// One open catalog page; card state lives exactly as long as the page
#[derive(Debug)]
pub struct CatalogPage {
    pub id: PageId,
    pub created_at: DateTime<Utc>,
    pub grid: CatalogGrid,
    pub lookup: Arc<CardLookupTable>,
}

pub struct GridComposer;

impl GridComposer {
    /// Build a page from the outcome of a catalog load
    pub fn compose(catalog: Result<LoadedCatalog, CatalogError>) -> CatalogPage {
        let (grid, lookup) = match catalog {
            Ok(catalog) => (
                CatalogGrid::Cards(Self::build_grid(catalog.creatures)),
                catalog.lookup,
            ),
            Err(e) => {
                tracing::error!("Error loading catalog: {}", e);
                (
                    CatalogGrid::Failed {
                        message: CATALOG_ERROR_MESSAGE.to_string(),
                    },
                    Arc::new(CardLookupTable::empty()),
                )
            }
        };

        CatalogPage {
            id: PageId::new(),
            created_at: Utc::now(),
            grid,
            lookup,
        }
    }

    fn build_grid(creatures: Vec<Creature>) -> CardGrid {
        let mut cards = Vec::with_capacity(creatures.len());
        let mut by_number = HashMap::with_capacity(creatures.len());

        for creature in creatures {
            by_number.insert(creature.number, cards.len());
            cards.push(Arc::new(CardView::new(creature)));
        }

        CardGrid { cards, by_number }
    }
}
