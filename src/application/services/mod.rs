//! Application services - Use case implementations
//!
//! Each service depends only on the outbound ports, never on infrastructure
//! types.

pub mod card_enrichment_service;
pub mod card_renderer;
pub mod catalog_loader;
pub mod catalog_page_service;
pub mod grid_composer;
pub mod sprite_resolver;

pub use card_renderer::CardSnapshot;
#[allow(unused_imports)]
pub use catalog_loader::LoadedCatalog;
pub use catalog_page_service::{CatalogPageService, PageError, PageSnapshot, SpriteFailureResult};
#[allow(unused_imports)]
pub use grid_composer::{CatalogPage, GridComposer};
pub use sprite_resolver::SPRITE_URL_PREFIX;
