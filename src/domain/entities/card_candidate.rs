//! Candidate card images returned by the remote card search

use serde::Deserialize;

use crate::domain::entities::card_caption;
use crate::domain::value_objects::RarityPriority;

/// Image URLs of one remote card
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CardImages {
    #[serde(default)]
    pub small: Option<String>,
    #[serde(default)]
    pub large: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CardSet {
    #[serde(default)]
    pub name: Option<String>,
}

/// One card returned by the remote search; lives only for one enrichment attempt
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RemoteCardCandidate {
    #[serde(default)]
    pub rarity: Option<String>,
    #[serde(default)]
    pub images: Option<CardImages>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub set: Option<CardSet>,
}

impl RemoteCardCandidate {
    pub fn priority(&self) -> RarityPriority {
        RarityPriority::of(self.rarity.as_deref())
    }

    /// Large image if present, else small
    pub fn best_image(&self) -> Option<&str> {
        let images = self.images.as_ref()?;
        non_blank(&images.large).or_else(|| non_blank(&images.small))
    }

    pub fn caption(&self) -> Option<String> {
        card_caption(
            self.name.as_deref(),
            self.set.as_ref().and_then(|set| set.name.as_deref()),
        )
    }
}

fn non_blank(url: &Option<String>) -> Option<&str> {
    url.as_deref().filter(|url| !url.trim().is_empty())
}

/// Order candidates by descending rarity priority
///
/// `sort_by_key` is stable, so equally ranked candidates keep the order the
/// search API returned them in.
pub fn rank_candidates(candidates: &mut [RemoteCardCandidate]) {
    candidates.sort_by_key(|candidate| std::cmp::Reverse(candidate.priority()));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(rarity: Option<&str>, large: Option<&str>) -> RemoteCardCandidate {
        RemoteCardCandidate {
            rarity: rarity.map(str::to_string),
            images: Some(CardImages {
                small: None,
                large: large.map(str::to_string),
            }),
            ..Default::default()
        }
    }

    #[test]
    fn test_rank_orders_by_priority() {
        let mut candidates = vec![
            candidate(Some("Common"), Some("common.png")),
            candidate(Some("Rare"), Some("rare.png")),
            candidate(None, Some("none.png")),
        ];
        rank_candidates(&mut candidates);

        let order: Vec<_> = candidates.iter().map(|c| c.best_image().unwrap()).collect();
        assert_eq!(order, vec!["rare.png", "common.png", "none.png"]);
    }

    #[test]
    fn test_rank_is_stable_for_ties() {
        let mut candidates = vec![
            candidate(Some("Rare"), Some("first.png")),
            candidate(Some("Common"), Some("common.png")),
            candidate(Some("RARE"), Some("second.png")),
            candidate(Some("Promo"), Some("promo.png")),
            candidate(None, Some("missing.png")),
        ];
        rank_candidates(&mut candidates);

        let order: Vec<_> = candidates.iter().map(|c| c.best_image().unwrap()).collect();
        assert_eq!(
            order,
            vec!["first.png", "second.png", "common.png", "promo.png", "missing.png"]
        );
    }

    #[test]
    fn test_uncommon_outranks_common() {
        let mut candidates = vec![
            candidate(Some("Common"), Some("common.png")),
            candidate(Some("Uncommon"), Some("uncommon.png")),
        ];
        rank_candidates(&mut candidates);
        assert_eq!(candidates[0].best_image(), Some("uncommon.png"));
    }

    #[test]
    fn test_best_image_prefers_large() {
        let candidate: RemoteCardCandidate = serde_json::from_str(
            r#"{"rarity": "Rare", "images": {"small": "s.png", "large": "l.png"}}"#,
        )
        .unwrap();
        assert_eq!(candidate.best_image(), Some("l.png"));

        let candidate: RemoteCardCandidate =
            serde_json::from_str(r#"{"images": {"small": "s.png"}}"#).unwrap();
        assert_eq!(candidate.best_image(), Some("s.png"));

        let candidate: RemoteCardCandidate = serde_json::from_str(r#"{"rarity": "Rare"}"#).unwrap();
        assert_eq!(candidate.best_image(), None);
    }

    #[test]
    fn test_caption_uses_set_name() {
        let candidate: RemoteCardCandidate = serde_json::from_str(
            r#"{"name": "Pikachu", "set": {"name": "Jungle"}, "images": {}}"#,
        )
        .unwrap();
        assert_eq!(candidate.caption().as_deref(), Some("Pikachu (Jungle)"));
    }
}
