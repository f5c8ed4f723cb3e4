//! Catalog source port - the static entity list and card lookup documents

use async_trait::async_trait;

use crate::domain::entities::{CardLookupTable, Creature};

#[derive(Debug, thiserror::Error)]
pub enum CatalogSourceError {
    #[error("Failed to read {document}: {message}")]
    Unavailable { document: String, message: String },
    #[error("Failed to parse {document}: {message}")]
    Malformed { document: String, message: String },
}

#[async_trait]
pub trait CatalogSourcePort: Send + Sync {
    /// Fetch the entity list
    async fn load_creatures(&self) -> Result<Vec<Creature>, CatalogSourceError>;

    /// Fetch the pre-resolved card lookup table
    async fn load_card_lookup(&self) -> Result<CardLookupTable, CatalogSourceError>;
}
