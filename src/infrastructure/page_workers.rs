//! Background workers for open catalog pages

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;

use crate::infrastructure::page_registry::PageRegistry;

/// Worker that drops pages nobody has touched within `retention`
pub async fn page_cleanup_worker(
    pages: Arc<RwLock<PageRegistry>>,
    retention: Duration,
    interval: Duration,
) {
    tracing::info!("Starting page cleanup worker");
    let retention = chrono::Duration::from_std(retention).unwrap_or(chrono::Duration::MAX);

    loop {
        tokio::time::sleep(interval).await;

        let mut registry = pages.write().await;
        let expired = registry.expire_idle(retention);
        if expired > 0 {
            tracing::info!(
                "Expired {} idle pages ({} still open)",
                expired,
                registry.page_count()
            );
        }
    }
}
