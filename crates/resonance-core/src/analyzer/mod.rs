//! Heuristic linguistic-affect scoring.
//!
//! Every function here is pure: the result depends only on the input text
//! and the static tables in [`crate::lexicon`].

pub mod classify;
pub mod criteria;
pub mod quick;

use serde::{Deserialize, Serialize};

pub use classify::{classify_affect, classify_footprint, trigger_scrolls, AffectClassification};
pub use criteria::{ArchetypeScore, EmotionScore, ThemeStrength};
pub use quick::quick_score;

pub const DEFAULT_POETIC_THRESHOLD: f64 = 0.6;

/// Score of each criterion, all in [0, 1].
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PoeticCriteria {
    pub cadence: f64,
    pub imagery: f64,
    pub metaphor_density: f64,
    pub glyph_usage: f64,
    pub archetypes: ArchetypeScore,
    pub emotional_evocation: EmotionScore,
}

impl PoeticCriteria {
    /// The six scalar scores; archetypes and emotions use their overall value.
    pub fn scalars(&self) -> [f64; 6] {
        [
            self.cadence,
            self.imagery,
            self.metaphor_density,
            self.glyph_usage,
            self.archetypes.score,
            self.emotional_evocation.overall_strength,
        ]
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AffectAnalysis {
    pub is_poetic: bool,
    pub criteria: PoeticCriteria,
    pub overall_score: f64,
    pub trigger_scrolls: Vec<String>,
    pub affect_classification: AffectClassification,
}

/// Analyzer bound to a poetic threshold.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AffectAnalyzer {
    threshold: f64,
}

impl Default for AffectAnalyzer {
    fn default() -> Self {
        Self::new(DEFAULT_POETIC_THRESHOLD)
    }
}

impl AffectAnalyzer {
    pub fn new(threshold: f64) -> Self {
        Self { threshold }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// A score qualifies only when strictly above the threshold.
    pub fn is_poetic_score(&self, score: f64) -> bool {
        score > self.threshold
    }

    pub fn analyze(&self, text: &str) -> AffectAnalysis {
        let lower = text.to_lowercase();

        let criteria = PoeticCriteria {
            cadence: criteria::cadence(text),
            imagery: criteria::imagery(&lower),
            metaphor_density: criteria::metaphor_density(text),
            glyph_usage: criteria::glyph_usage(text),
            archetypes: criteria::archetypes(&lower),
            emotional_evocation: criteria::emotional_evocation(&lower),
        };

        let scalars = criteria.scalars();
        let overall_score = scalars.iter().sum::<f64>() / scalars.len() as f64;

        AffectAnalysis {
            is_poetic: self.is_poetic_score(overall_score),
            criteria,
            overall_score,
            trigger_scrolls: trigger_scrolls(&lower),
            affect_classification: classify_affect(&lower),
        }
    }

    /// Five-criterion verdict against the same threshold.
    pub fn quick_verdict(&self, text: &str) -> bool {
        self.is_poetic_score(quick_score(text))
    }
}

/// Analyze with the default threshold.
pub fn analyze(text: &str) -> AffectAnalysis {
    AffectAnalyzer::default().analyze(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Mood;

    const SATURATED: &str = "Dream and vision, reverie and memory, remember the echo. \
        It becomes light. Divine, sacred, eternal, infinite hope, yearning, mystery, \
        secret, harmony. Glow, shimmer, whisper, velvet, silk. It dances and breathes \
        softly. ✨🔮";

    fn in_unit_range(x: f64) -> bool {
        (0.0..=1.0).contains(&x)
    }

    #[test]
    fn test_saturated_text_is_poetic() {
        let analysis = analyze(SATURATED);
        for score in analysis.criteria.scalars() {
            assert_eq!(score, 1.0);
        }
        assert_eq!(analysis.overall_score, 1.0);
        assert!(analysis.is_poetic);
        assert_eq!(
            analysis.trigger_scrolls,
            vec!["VELVETMEMORY", "ECHOBLOOM", "DRAWEROF_ECHOES"]
        );
    }

    #[test]
    fn test_plain_text_is_not_poetic() {
        let analysis = analyze("Quarterly report attached");
        assert_eq!(analysis.overall_score, 0.0);
        assert!(!analysis.is_poetic);
        assert!(analysis.trigger_scrolls.is_empty());
        assert_eq!(analysis.affect_classification.dominant, None);
    }

    #[test]
    fn test_empty_text() {
        let analysis = analyze("");
        assert_eq!(analysis.overall_score, 0.0);
        assert!(!analysis.is_poetic);
    }

    #[test]
    fn test_threshold_is_strict() {
        let analyzer = AffectAnalyzer::default();
        assert!(!analyzer.is_poetic_score(0.6));
        assert!(analyzer.is_poetic_score(0.600_001));
        assert!(!AffectAnalyzer::new(1.0).is_poetic_score(1.0));
    }

    #[test]
    fn test_scores_stay_in_unit_range() {
        let samples = [
            "",
            ".",
            "\n\n\n\n",
            ", , , , , , , ,",
            "✨✨✨✨✨✨✨✨ ∞∞∞ ♥♥♥",
            SATURATED,
            "The velvet memory whispers through crystalline echoes, like moonlight dancing on still waters...",
            "is like is like is like is like becomes becomes transforms into melts into",
        ];
        for text in samples {
            let analysis = analyze(text);
            assert!(in_unit_range(analysis.overall_score), "{text:?}");
            for score in analysis.criteria.scalars() {
                assert!(in_unit_range(score), "{text:?}");
            }
            assert!(in_unit_range(analysis.affect_classification.strength));
            for strength in analysis.criteria.emotional_evocation.emotions.values() {
                assert!(in_unit_range(*strength));
            }
        }
    }

    #[test]
    fn test_classification_included() {
        let analysis = analyze("a serene, tranquil and calm lake");
        assert_eq!(analysis.affect_classification.dominant, Some(Mood::Amethyst));
    }

    #[test]
    fn test_quick_verdict_uses_threshold() {
        assert!(!AffectAnalyzer::default().quick_verdict("plain"));
        assert!(AffectAnalyzer::new(0.0).quick_verdict("glass"));
    }
}
