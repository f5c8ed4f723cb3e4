//! Domain entities - Core business objects with identity

mod card_candidate;
mod card_lookup;
mod creature;

pub use card_candidate::{rank_candidates, CardImages, RemoteCardCandidate};
pub use card_lookup::{card_caption, CardLookupEntry, CardLookupTable};
pub use creature::Creature;
