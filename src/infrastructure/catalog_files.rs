//! File-backed catalog source
//!
//! Reads the entity list (`pokemon.json`) and the card lookup table
//! (`cards.json`) from the data directory on every load.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use crate::application::ports::outbound::{CatalogSourceError, CatalogSourcePort};
use crate::domain::entities::{CardLookupTable, Creature};

pub const CREATURES_FILE: &str = "pokemon.json";
pub const CARD_LOOKUP_FILE: &str = "cards.json";

/// Catalog documents stored as JSON files in one directory
#[derive(Debug, Clone)]
pub struct FileCatalogSource {
    data_dir: PathBuf,
}

impl FileCatalogSource {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    async fn read_json<T: DeserializeOwned>(&self, file: &str) -> Result<T, CatalogSourceError> {
        let path = self.data_dir.join(file);
        let bytes = tokio::fs::read(&path)
            .await
            .map_err(|e| CatalogSourceError::Unavailable {
                document: display(&path),
                message: e.to_string(),
            })?;

        serde_json::from_slice(&bytes).map_err(|e| CatalogSourceError::Malformed {
            document: display(&path),
            message: e.to_string(),
        })
    }
}

fn display(path: &Path) -> String {
    path.display().to_string()
}

#[async_trait]
impl CatalogSourcePort for FileCatalogSource {
    async fn load_creatures(&self) -> Result<Vec<Creature>, CatalogSourceError> {
        self.read_json(CREATURES_FILE).await
    }

    async fn load_card_lookup(&self) -> Result<CardLookupTable, CatalogSourceError> {
        self.read_json(CARD_LOOKUP_FILE).await
    }
}
