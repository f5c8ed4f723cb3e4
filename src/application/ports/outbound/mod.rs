//! Outbound ports - Interfaces that the application requires from external systems

mod card_search_port;
mod catalog_source_port;

#[allow(unused_imports)]
pub use card_search_port::{CardSearchError, CardSearchPort, CardSearchQuery, CARD_SEARCH_PAGE_SIZE};
pub use catalog_source_port::{CatalogSourceError, CatalogSourcePort};
