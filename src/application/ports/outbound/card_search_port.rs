//! Card search port - the remote card search API

use async_trait::async_trait;

use crate::domain::entities::RemoteCardCandidate;
use crate::domain::value_objects::DexNumber;

/// Page size of the single card search request
///
/// Only one page is ever requested. When a creature has more cards than
/// this, the rest are never seen.
pub const CARD_SEARCH_PAGE_SIZE: u32 = 250;

/// A card search filtered by catalog number
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardSearchQuery {
    pub number: DexNumber,
    pub page_size: u32,
}

impl CardSearchQuery {
    pub fn for_number(number: DexNumber) -> Self {
        Self {
            number,
            page_size: CARD_SEARCH_PAGE_SIZE,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CardSearchError {
    #[error("HTTP request failed: {0}")]
    Http(String),
    #[error("API error ({status}): {body}")]
    Api { status: u16, body: String },
    #[error("Invalid response: {0}")]
    Decode(String),
}

/// Read-only, unauthenticated search for cards of one creature
///
/// Implementations make exactly one request per call: no retry, no backoff
/// and no timeout.
#[async_trait]
pub trait CardSearchPort: Send + Sync {
    async fn search(
        &self,
        query: CardSearchQuery,
    ) -> Result<Vec<RemoteCardCandidate>, CardSearchError>;
}
