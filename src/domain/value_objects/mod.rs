//! Value objects - Immutable objects defined by their attributes

mod ids;
mod rarity;
mod sprite_slug;
mod visual_state;

pub use ids::{DexNumber, PageId};
pub use rarity::RarityPriority;
pub use sprite_slug::{alternate_slug, primary_slug};
pub use visual_state::{
    CardVisualState, FailureKind, FlipState, ResolvedCard, SpriteVisualState, UnavailableReason,
};
