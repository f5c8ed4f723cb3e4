//! Pre-resolved card images keyed by catalog number

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::DexNumber;

/// One entry of the local card lookup table
///
/// Only `card_image` drives resolution. The remaining fields are written by
/// the offline card fetcher and feed the caption.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardLookupEntry {
    #[serde(default)]
    pub card_image: Option<String>,
    #[serde(default)]
    pub card_name: Option<String>,
    #[serde(default)]
    pub set_name: Option<String>,
    #[serde(default)]
    pub rarity: Option<String>,
}

impl CardLookupEntry {
    pub fn with_image(card_image: impl Into<String>) -> Self {
        Self {
            card_image: Some(card_image.into()),
            ..Default::default()
        }
    }

    /// The card image URL, ignoring blank values
    pub fn image(&self) -> Option<&str> {
        self.card_image
            .as_deref()
            .filter(|url| !url.trim().is_empty())
    }

    pub fn caption(&self) -> Option<String> {
        card_caption(self.card_name.as_deref(), self.set_name.as_deref())
    }
}

/// Build a "card name (set name)" caption from whatever parts are present
pub fn card_caption(card_name: Option<&str>, set_name: Option<&str>) -> Option<String> {
    let card_name = card_name.filter(|s| !s.trim().is_empty());
    let set_name = set_name.filter(|s| !s.trim().is_empty());
    match (card_name, set_name) {
        (Some(card), Some(set)) => Some(format!("{} ({})", card, set)),
        (Some(card), None) => Some(card.to_string()),
        (None, Some(set)) => Some(set.to_string()),
        (None, None) => None,
    }
}

/// Immutable mapping from catalog number to lookup entry
///
/// Serialized as a JSON object whose keys are the numbers as strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardLookupTable {
    entries: HashMap<DexNumber, CardLookupEntry>,
}

impl CardLookupTable {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn get(&self, number: DexNumber) -> Option<&CardLookupEntry> {
        self.entries.get(&number)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(DexNumber, CardLookupEntry)> for CardLookupTable {
    fn from_iter<T: IntoIterator<Item = (DexNumber, CardLookupEntry)>>(iter: T) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_string_keys() {
        let table: CardLookupTable = serde_json::from_str(
            r#"{
                "1": {"card_image": "https://images.example/base1-44_hires.png",
                      "card_name": "Bulbasaur", "set_name": "Base", "rarity": "Common"},
                "4": {},
                "7": {"card_image": ""}
            }"#,
        )
        .unwrap();

        assert_eq!(table.len(), 3);
        let bulbasaur = table.get(DexNumber::new(1).unwrap()).unwrap();
        assert_eq!(
            bulbasaur.image(),
            Some("https://images.example/base1-44_hires.png")
        );
        assert_eq!(bulbasaur.caption().as_deref(), Some("Bulbasaur (Base)"));
        assert_eq!(table.get(DexNumber::new(4).unwrap()).unwrap().image(), None);
        assert_eq!(table.get(DexNumber::new(7).unwrap()).unwrap().image(), None);
        assert!(table.get(DexNumber::new(25).unwrap()).is_none());
    }

    #[test]
    fn test_card_caption_parts() {
        assert_eq!(card_caption(None, None), None);
        assert_eq!(card_caption(Some("Mew"), None).as_deref(), Some("Mew"));
        assert_eq!(card_caption(Some(" "), Some("Promo")).as_deref(), Some("Promo"));
    }
}
