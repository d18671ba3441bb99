use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::criteria::count_keywords;
use crate::lexicon;
use crate::model::{AffectFootprint, Mood};

/// Keyword counts per mood and the dominant one.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AffectClassification {
    /// Mood with the strictly highest count. Ties keep the earliest mood in
    /// amethyst, citrine, obsidian order; no hits means no dominant mood.
    pub dominant: Option<Mood>,
    pub scores: BTreeMap<Mood, usize>,
    /// Highest count divided by three, capped at 1.
    pub strength: f64,
}

/// Named trigger scrolls whose phrases occur in `lower`, deduplicated, in
/// lexicon order.
pub fn trigger_scrolls(lower: &str) -> Vec<String> {
    lexicon::TRIGGER_SCROLLS
        .iter()
        .filter(|(_, phrases)| phrases.iter().any(|p| lower.contains(*p)))
        .map(|(name, _)| name.to_string())
        .collect()
}

pub fn classify_affect(lower: &str) -> AffectClassification {
    let mut scores = BTreeMap::new();
    let mut dominant = None;
    let mut max = 0;

    for (mood, words) in Mood::ALL.into_iter().zip(lexicon::AFFECT_CLASSES) {
        let hits = count_keywords(lower, words);
        scores.insert(mood, hits);
        if hits > max {
            max = hits;
            dominant = Some(mood);
        }
    }

    AffectClassification {
        dominant,
        scores,
        strength: (max as f64 / 3.0).min(1.0),
    }
}

/// Per-scroll affect footprint: each mood's share of the footprint keyword
/// hits, or [`AffectFootprint::NEUTRAL`] when there are none.
pub fn classify_footprint(text: &str) -> AffectFootprint {
    let lower = text.to_lowercase();
    let [amethyst, citrine, obsidian] =
        lexicon::FOOTPRINT_CLASSES.map(|words| count_keywords(&lower, words) as f64);

    if amethyst + citrine + obsidian == 0.0 {
        return AffectFootprint::NEUTRAL;
    }

    AffectFootprint {
        amethyst,
        citrine,
        obsidian,
    }
    .normalized()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trigger_scrolls_deduplicated() {
        // "echo" belongs to two scrolls; each is reported once.
        let lower = "an echo of velvet memory and gathered echoes";
        assert_eq!(
            trigger_scrolls(lower),
            vec!["VELVETMEMORY", "ECHOBLOOM", "DRAWEROF_ECHOES"]
        );
        assert!(trigger_scrolls("plain text").is_empty());
    }

    #[test]
    fn test_classify_affect_dominant() {
        let c = classify_affect("a deep, mysterious and powerful night, yet calm");
        assert_eq!(c.dominant, Some(Mood::Obsidian));
        assert_eq!(c.scores[&Mood::Obsidian], 3);
        assert_eq!(c.scores[&Mood::Amethyst], 1);
        assert_eq!(c.scores[&Mood::Citrine], 0);
        assert_eq!(c.strength, 1.0);
    }

    #[test]
    fn test_classify_affect_tie_keeps_first() {
        let c = classify_affect("calm and bright");
        assert_eq!(c.dominant, Some(Mood::Amethyst));
        assert!((c.strength - 1.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_classify_affect_no_signal() {
        let c = classify_affect("nothing to see");
        assert_eq!(c.dominant, None);
        assert_eq!(c.strength, 0.0);
        assert_eq!(c.scores.len(), 3);
    }

    #[test]
    fn test_footprint_neutral_without_hits() {
        let fp = classify_footprint("plain words");
        assert_eq!(fp, AffectFootprint::NEUTRAL);
        assert_eq!(fp.amethyst, 0.33);
        assert_eq!(fp.citrine, 0.33);
        assert_eq!(fp.obsidian, 0.34);
    }

    #[test]
    fn test_footprint_proportional() {
        let fp = classify_footprint("Calm wisdom, bright JOY, and shadow");
        // amethyst: calm, wisdom; citrine: bright, joy; obsidian: shadow
        assert!((fp.amethyst - 0.4).abs() < 1e-12);
        assert!((fp.citrine - 0.4).abs() < 1e-12);
        assert!((fp.obsidian - 0.2).abs() < 1e-12);
        assert!((fp.total() - 1.0).abs() < 1e-12);
    }
}
