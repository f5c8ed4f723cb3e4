//! Strongly-typed identifiers for domain entities

use serde::{Deserialize, Serialize};
use uuid::Uuid;

macro_rules! define_id {
    ($name:ident) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub struct $name(Uuid);

        impl $name {
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            pub fn from_uuid(uuid: Uuid) -> Self {
                Self(uuid)
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<Uuid> for $name {
            fn from(uuid: Uuid) -> Self {
                Self(uuid)
            }
        }
    };
}

define_id!(PageId);

/// Catalog number of a creature - the stable, positive identifier
///
/// Rendered zero-padded to 3 digits on card labels and 4 digits in sprite
/// filenames. Both widths are fixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct DexNumber(u32);

impl DexNumber {
    pub fn new(value: u32) -> Option<Self> {
        (value > 0).then_some(Self(value))
    }

    pub fn value(&self) -> u32 {
        self.0
    }

    /// On-card label, e.g. `#007`
    pub fn label(&self) -> String {
        format!("#{:03}", self.0)
    }

    /// Filename segment, e.g. `0007`
    pub fn file_segment(&self) -> String {
        format!("{:04}", self.0)
    }
}

impl TryFrom<u32> for DexNumber {
    type Error = String;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value).ok_or_else(|| "catalog number must be positive".to_string())
    }
}

impl From<DexNumber> for u32 {
    fn from(number: DexNumber) -> u32 {
        number.0
    }
}

impl std::fmt::Display for DexNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dex_number_padding() {
        let number = DexNumber::new(7).unwrap();
        assert_eq!(number.label(), "#007");
        assert_eq!(number.file_segment(), "0007");

        let number = DexNumber::new(1025).unwrap();
        assert_eq!(number.label(), "#1025");
        assert_eq!(number.file_segment(), "1025");
    }

    #[test]
    fn test_dex_number_rejects_zero() {
        assert!(DexNumber::new(0).is_none());
        assert!(serde_json::from_str::<DexNumber>("0").is_err());
        assert_eq!(serde_json::from_str::<DexNumber>("25").unwrap().value(), 25);
    }
}
