//! Card Enrichment Service - Lazily resolves the back-face card image
//!
//! Resolution runs at most once per card. The local lookup table is consulted
//! first; only when it has no image for the creature is the remote card
//! search queried, and its candidates ranked by rarity.
//!
//! # Architecture
//!
//! This service lives in the application layer and depends only on the
//! `CardSearchPort`. The per-card guard and state live in [`CardBack`], which
//! the card view owns.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{debug, error, info, instrument};

use crate::application::ports::outbound::{CardSearchPort, CardSearchQuery};
use crate::domain::entities::{rank_candidates, CardLookupTable, Creature, RemoteCardCandidate};
use crate::domain::value_objects::{
    CardVisualState, FailureKind, ResolvedCard, UnavailableReason,
};

/// Back-face state of one card plus its one-shot resolution guard
#[derive(Debug)]
pub struct CardBack {
    attempted: AtomicBool,
    state: RwLock<CardVisualState>,
}

impl CardBack {
    pub fn new() -> Self {
        Self {
            attempted: AtomicBool::new(false),
            state: RwLock::new(CardVisualState::NotAttempted),
        }
    }

    /// Claim the single resolution attempt and enter `Loading`
    ///
    /// Test-and-set: of any number of concurrent callers exactly one gets
    /// `true`. The flag flips under the state write lock, so no reader sees
    /// `NotAttempted` once an attempt is claimed.
    pub async fn try_begin(&self) -> bool {
        let mut state = self.state.write().await;
        if self.attempted.swap(true, Ordering::AcqRel) {
            return false;
        }
        *state = CardVisualState::Loading;
        true
    }

    pub async fn state(&self) -> CardVisualState {
        self.state.read().await.clone()
    }

    /// Record the terminal outcome of the attempt and return the current state
    pub async fn finish(&self, outcome: CardVisualState) -> CardVisualState {
        let mut state = self.state.write().await;
        if !state.settle(outcome) {
            debug!(state = state.kind(), "Ignoring late card outcome");
        }
        state.clone()
    }

    /// The browser failed to load the resolved card image
    pub async fn image_failed(&self) -> CardVisualState {
        let mut state = self.state.write().await;
        state.image_failed();
        state.clone()
    }
}

impl Default for CardBack {
    fn default() -> Self {
        Self::new()
    }
}

/// Pick the back-face outcome from the remote search candidates
pub fn select_card(mut candidates: Vec<RemoteCardCandidate>) -> CardVisualState {
    if candidates.is_empty() {
        return CardVisualState::Unavailable(UnavailableReason::NoCardFound);
    }

    rank_candidates(&mut candidates);
    let best = &candidates[0];

    match best.best_image() {
        Some(url) => CardVisualState::Resolved(ResolvedCard::new(url).with_caption(best.caption())),
        None => CardVisualState::Unavailable(UnavailableReason::NoImage),
    }
}

/// Service resolving card images through the lookup table and remote search
pub struct CardEnrichmentService<S: CardSearchPort> {
    search: Arc<S>,
}

impl<S: CardSearchPort> CardEnrichmentService<S> {
    pub fn new(search: Arc<S>) -> Self {
        Self { search }
    }

    /// Resolve the back face of one card
    ///
    /// A second call for the same card is a no-op that returns the state the
    /// first call left behind (possibly still `Loading`).
    pub async fn resolve(
        &self,
        creature: &Creature,
        lookup: &CardLookupTable,
        back: &CardBack,
    ) -> CardVisualState {
        if !back.try_begin().await {
            debug!(number = %creature.number, "Card already attempted");
            return back.state().await;
        }
        self.enrich(creature, lookup, back).await
    }

    /// Run the resolution for a card whose guard the caller already claimed
    #[instrument(skip(self, lookup, back), fields(number = %creature.number, name = %creature.name))]
    pub async fn enrich(
        &self,
        creature: &Creature,
        lookup: &CardLookupTable,
        back: &CardBack,
    ) -> CardVisualState {
        let outcome = self.lookup_or_search(creature, lookup).await;
        info!(outcome = outcome.kind(), "Card resolution finished");
        back.finish(outcome).await
    }

    async fn lookup_or_search(
        &self,
        creature: &Creature,
        lookup: &CardLookupTable,
    ) -> CardVisualState {
        if let Some(entry) = lookup.get(creature.number) {
            if let Some(url) = entry.image() {
                debug!("Using card image from lookup table");
                return CardVisualState::Resolved(
                    ResolvedCard::new(url).with_caption(entry.caption()),
                );
            }
        }

        match self.search.search(CardSearchQuery::for_number(creature.number)).await {
            Ok(candidates) => {
                debug!(count = candidates.len(), "Card search returned candidates");
                select_card(candidates)
            }
            Err(e) => {
                error!("Error loading card for {}: {}", creature.name, e);
                CardVisualState::Failed(FailureKind::Request)
            }
        }
    }
}
