//! Domain layer - Core catalog logic with no external dependencies
//!
//! This layer contains:
//! - Entities: Creature, card lookup table, remote card candidates
//! - Value Objects: catalog numbers, rarity priority, sprite slugs, visual states

pub mod entities;
pub mod value_objects;
