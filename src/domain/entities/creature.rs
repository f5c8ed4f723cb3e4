//! Creature entity - one catalog item shown as a flip card

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::DexNumber;

/// A creature record from the catalog's entity list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Creature {
    pub number: DexNumber,
    pub name: String,
    /// Explicit sprite filename slug, overriding the one derived from `name`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sprite_name: Option<String>,
}

impl Creature {
    pub fn new(number: DexNumber, name: impl Into<String>) -> Self {
        Self {
            number,
            name: name.into(),
            sprite_name: None,
        }
    }

    pub fn with_sprite_name(mut self, sprite_name: impl Into<String>) -> Self {
        self.sprite_name = Some(sprite_name.into());
        self
    }

    /// The sprite override, ignoring blank values
    pub fn sprite_override(&self) -> Option<&str> {
        self.sprite_name
            .as_deref()
            .filter(|name| !name.trim().is_empty())
    }

    pub fn label(&self) -> String {
        self.number.label()
    }
}
