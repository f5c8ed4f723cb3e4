//! Page registry for open catalog pages
//!
//! Every browser page that calls the page-ready endpoint gets its own
//! [`CatalogPage`], and with it its own flip, sprite and card state. Pages are
//! dropped on explicit teardown or after sitting idle past the retention
//! window.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};

use crate::application::services::CatalogPage;
use crate::domain::value_objects::PageId;

struct PageEntry {
    page: Arc<CatalogPage>,
    last_seen: DateTime<Utc>,
}

/// Open pages by ID
pub struct PageRegistry {
    pages: HashMap<PageId, PageEntry>,
}

impl PageRegistry {
    pub fn new() -> Self {
        Self {
            pages: HashMap::new(),
        }
    }

    /// Register a freshly composed page
    pub fn insert(&mut self, page: CatalogPage) -> Arc<CatalogPage> {
        let page = Arc::new(page);
        self.pages.insert(
            page.id,
            PageEntry {
                page: page.clone(),
                last_seen: Utc::now(),
            },
        );
        tracing::info!("Registered page {}", page.id);
        page
    }

    /// Look up a page and mark it as recently used
    pub fn touch(&mut self, page_id: PageId) -> Option<Arc<CatalogPage>> {
        let entry = self.pages.get_mut(&page_id)?;
        entry.last_seen = Utc::now();
        Some(entry.page.clone())
    }

    /// Tear down a page
    ///
    /// In-flight card resolutions keep their own handle on the card and
    /// finish unobserved.
    pub fn remove(&mut self, page_id: PageId) -> bool {
        let removed = self.pages.remove(&page_id).is_some();
        if removed {
            tracing::info!("Removed page {}", page_id);
        }
        removed
    }

    /// Drop pages idle for longer than `retention`; returns how many went
    pub fn expire_idle(&mut self, retention: Duration) -> usize {
        self.expire_idle_at(Utc::now(), retention)
    }

    fn expire_idle_at(&mut self, now: DateTime<Utc>, retention: Duration) -> usize {
        let before = self.pages.len();
        self.pages
            .retain(|_, entry| now.signed_duration_since(entry.last_seen) <= retention);
        before - self.pages.len()
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }
}

impl Default for PageRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::services::GridComposer;
    use crate::application::services::LoadedCatalog;
    use crate::domain::entities::{CardLookupTable, Creature};
    use crate::domain::value_objects::DexNumber;

    fn create_test_page() -> CatalogPage {
        GridComposer::compose(Ok(LoadedCatalog {
            creatures: vec![Creature::new(DexNumber::new(133).unwrap(), "Eevee")],
            lookup: Arc::new(CardLookupTable::empty()),
        }))
    }

    #[test]
    fn test_insert_touch_remove() {
        let mut registry = PageRegistry::new();
        let page = registry.insert(create_test_page());

        assert_eq!(registry.page_count(), 1);
        assert_eq!(registry.touch(page.id).unwrap().id, page.id);
        assert!(registry.touch(PageId::new()).is_none());

        assert!(registry.remove(page.id));
        assert!(!registry.remove(page.id));
        assert_eq!(registry.page_count(), 0);
    }

    #[test]
    fn test_expire_idle_pages() {
        let mut registry = PageRegistry::new();
        let old = registry.insert(create_test_page());
        let fresh = registry.insert(create_test_page());
        let later = Utc::now() + Duration::minutes(90);
        registry.pages.get_mut(&fresh.id).unwrap().last_seen = later;

        let expired = registry.expire_idle_at(later, Duration::minutes(60));

        assert_eq!(expired, 1);
        assert!(registry.touch(old.id).is_none());
        assert!(registry.touch(fresh.id).is_some());
    }
}
