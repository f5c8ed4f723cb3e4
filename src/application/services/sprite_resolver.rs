//! Sprite Resolver - Maps creatures to sprite image URLs
//!
//! Each creature gets at most two sprite load attempts: the primary URL, then
//! an alternate URL built from a more aggressive transliteration of the name.
//! The image loader reports failures back through [`SpriteSlot::load_failed`],
//! naming the attempt that failed. The slot walks
//! `Primary -> Alternate -> Errored` and never back; a report for an attempt
//! that is no longer current is ignored.

use serde::Serialize;

use crate::domain::entities::Creature;
use crate::domain::value_objects::{alternate_slug, primary_slug, SpriteVisualState};

/// URL prefix under which sprite files are served
pub const SPRITE_URL_PREFIX: &str = "/sprites";

/// Primary sprite URL: the explicit override if any, else the derived slug
pub fn primary_sprite_url(creature: &Creature) -> String {
    let slug = creature
        .sprite_override()
        .map(str::to_string)
        .unwrap_or_else(|| primary_slug(&creature.name));
    sprite_url(creature, &slug)
}

/// Alternate sprite URL, always derived from the name
pub fn alternate_sprite_url(creature: &Creature) -> String {
    sprite_url(creature, &alternate_slug(&creature.name))
}

fn sprite_url(creature: &Creature, slug: &str) -> String {
    format!(
        "{}/{}_{}.png",
        SPRITE_URL_PREFIX,
        creature.number.file_segment(),
        slug
    )
}

/// What the image loader should do after a sprite load failure
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum SpriteLoadOutcome {
    /// Try loading this URL next
    Retry { url: String },
    /// Both attempts failed; show the error marker
    Errored,
    /// The failed attempt is no longer current; nothing to do
    Ignored,
}

/// Front-face sprite state of one card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpriteSlot {
    state: SpriteVisualState,
}

impl SpriteSlot {
    pub fn new() -> Self {
        Self {
            state: SpriteVisualState::Primary,
        }
    }

    pub fn state(&self) -> SpriteVisualState {
        self.state
    }

    /// URL the image element should currently show, if any
    pub fn current_url(&self, creature: &Creature) -> Option<String> {
        match self.state {
            SpriteVisualState::Primary => Some(primary_sprite_url(creature)),
            SpriteVisualState::Alternate => Some(alternate_sprite_url(creature)),
            SpriteVisualState::Errored => None,
        }
    }

    /// Transition after the `failed` attempt's URL failed to load
    ///
    /// Missing files and network errors are treated the same.
    pub fn load_failed(
        &mut self,
        creature: &Creature,
        failed: SpriteVisualState,
    ) -> SpriteLoadOutcome {
        if failed != self.state {
            tracing::debug!(
                number = %creature.number,
                failed = failed.as_str(),
                current = self.state.as_str(),
                "Ignoring stale sprite failure"
            );
            return SpriteLoadOutcome::Ignored;
        }
        let Some(next) = self.state.next() else {
            return SpriteLoadOutcome::Ignored;
        };
        self.state = next;

        match next {
            SpriteVisualState::Alternate => SpriteLoadOutcome::Retry {
                url: alternate_sprite_url(creature),
            },
            _ => {
                tracing::debug!(number = %creature.number, "Both sprite URLs failed");
                SpriteLoadOutcome::Errored
            }
        }
    }
}

impl Default for SpriteSlot {
    fn default() -> Self {
        Self::new()
    }
}
