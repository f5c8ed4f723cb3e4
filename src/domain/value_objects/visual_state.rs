//! Per-card visual states
//!
//! All three machines only move forward. Transition functions return `false`
//! (or `None`) instead of moving backwards, so callers can treat late or
//! duplicate events as no-ops.

use serde::{Deserialize, Serialize};

/// Why a card image could not be shown even though nothing went wrong
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum UnavailableReason {
    /// The remote search returned no candidates
    NoCardFound,
    /// The best candidate had neither a large nor a small image
    NoImage,
}

/// What went wrong while showing a card image
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// The resolved image URL failed to load
    ImageLoad,
    /// The remote search call or its decoding failed
    Request,
}

/// Back-face state of one card
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardVisualState {
    NotAttempted,
    Loading,
    Resolved(ResolvedCard),
    Unavailable(UnavailableReason),
    Failed(FailureKind),
}

/// A card image chosen for the back face
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedCard {
    pub image_url: String,
    /// Optional "card name (set name)" caption
    pub caption: Option<String>,
}

impl ResolvedCard {
    pub fn new(image_url: impl Into<String>) -> Self {
        Self {
            image_url: image_url.into(),
            caption: None,
        }
    }

    pub fn with_caption(mut self, caption: Option<String>) -> Self {
        self.caption = caption;
        self
    }
}

impl CardVisualState {
    /// Short state name for API payloads
    pub fn kind(&self) -> &'static str {
        match self {
            Self::NotAttempted => "not_attempted",
            Self::Loading => "loading",
            Self::Resolved(_) => "resolved",
            Self::Unavailable(_) => "unavailable",
            Self::Failed(_) => "failed",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            Self::Resolved(_) | Self::Unavailable(_) | Self::Failed(_)
        )
    }

    pub fn image_url(&self) -> Option<&str> {
        match self {
            Self::Resolved(card) => Some(&card.image_url),
            _ => None,
        }
    }

    /// User-facing text for this state, if it shows text rather than an image
    pub fn message(&self, name: &str) -> Option<String> {
        match self {
            Self::NotAttempted | Self::Loading => Some("Loading card...".to_string()),
            Self::Resolved(_) => None,
            Self::Unavailable(UnavailableReason::NoCardFound) => {
                Some(format!("No card found for {}", name))
            }
            Self::Unavailable(UnavailableReason::NoImage)
            | Self::Failed(FailureKind::ImageLoad) => {
                Some(format!("No card image available for {}", name))
            }
            Self::Failed(FailureKind::Request) => Some(format!("Error loading card for {}", name)),
        }
    }

    /// Move from `Loading` to a terminal state
    pub fn settle(&mut self, outcome: CardVisualState) -> bool {
        if !matches!(self, Self::Loading) || !outcome.is_terminal() {
            return false;
        }
        *self = outcome;
        true
    }

    /// The resolved image failed to load in the browser
    pub fn image_failed(&mut self) -> bool {
        if !matches!(self, Self::Resolved(_)) {
            return false;
        }
        *self = Self::Failed(FailureKind::ImageLoad);
        true
    }
}

/// Front-face sprite state of one card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpriteVisualState {
    Primary,
    Alternate,
    Errored,
}

impl SpriteVisualState {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Alternate => "alternate",
            Self::Errored => "errored",
        }
    }

    /// Advance after a load failure of the current sprite URL
    pub fn next(self) -> Option<Self> {
        match self {
            Self::Primary => Some(Self::Alternate),
            Self::Alternate => Some(Self::Errored),
            Self::Errored => None,
        }
    }
}

/// Whether a card currently shows its back face
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FlipState {
    #[default]
    Unflipped,
    Flipped,
}

impl FlipState {
    pub fn toggled(self) -> Self {
        match self {
            Self::Unflipped => Self::Flipped,
            Self::Flipped => Self::Unflipped,
        }
    }
}
