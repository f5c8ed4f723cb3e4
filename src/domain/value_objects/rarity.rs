//! Rarity priority used to rank candidate card images

/// Priority for rarity strings outside the table, including missing ones
pub const UNRANKED_PRIORITY: i8 = -2;

const RARITY_TABLE: [(&str, i8); 5] = [
    ("secret rare", 3),
    ("ultra rare", 2),
    ("rare", 1),
    ("uncommon", 0),
    ("common", -1),
];

/// Numeric rank of a card rarity; higher is better
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RarityPriority(i8);

impl RarityPriority {
    /// Look up a rarity string, case-insensitively
    pub fn of(rarity: Option<&str>) -> Self {
        let Some(rarity) = rarity else {
            return Self(UNRANKED_PRIORITY);
        };
        let rarity = rarity.to_lowercase();

        RARITY_TABLE
            .iter()
            .find(|(name, _)| *name == rarity)
            .map(|(_, priority)| Self(*priority))
            .unwrap_or(Self(UNRANKED_PRIORITY))
    }

    pub fn value(&self) -> i8 {
        self.0
    }
}
