use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::lexicon;

const IMAGERY_DENOMINATOR: f64 = 5.0;
const METAPHOR_DENOMINATOR: f64 = 3.0;
const GLYPH_DENOMINATOR: f64 = 2.0;
const ARCHETYPE_DENOMINATOR: f64 = 5.0;
const EMOTION_DENOMINATOR: f64 = 8.0;

static CADENCE: Lazy<Vec<Regex>> = Lazy::new(|| compile(lexicon::CADENCE_PATTERNS));
static METAPHOR: Lazy<Vec<Regex>> = Lazy::new(|| compile(lexicon::METAPHOR_PATTERNS));

fn compile(patterns: &[&str]) -> Vec<Regex> {
    patterns
        .iter()
        .map(|p| Regex::new(p).expect("lexicon patterns are valid"))
        .collect()
}

fn count_matches(patterns: &[Regex], text: &str) -> usize {
    patterns.iter().map(|re| re.find_iter(text).count()).sum()
}

/// Number of keywords that occur at least once in `lower`.
pub(crate) fn count_keywords(lower: &str, words: &[&str]) -> usize {
    words.iter().filter(|w| lower.contains(**w)).count()
}

pub(crate) fn ratio(hits: usize, denominator: f64) -> f64 {
    (hits as f64 / denominator).min(1.0)
}

/// Strength of one archetype or emotion theme found in a text.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ThemeStrength {
    pub theme: String,
    pub strength: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ArchetypeScore {
    /// Themes with at least one hit, in lexicon order.
    pub detected: Vec<ThemeStrength>,
    pub score: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct EmotionScore {
    /// Per-theme strength, for themes with at least one hit.
    pub emotions: BTreeMap<String, f64>,
    pub overall_strength: f64,
}

/// Rhythm markers per hundred characters, capped at 1.
pub fn cadence(text: &str) -> f64 {
    let len = text.chars().count();
    if len == 0 {
        return 0.0;
    }
    let hits = count_matches(&CADENCE, text);
    (hits as f64 * 100.0 / len as f64).min(1.0)
}

pub fn imagery(lower: &str) -> f64 {
    let hits = lexicon::IMAGERY
        .iter()
        .map(|(_, words)| count_keywords(lower, words))
        .sum();
    ratio(hits, IMAGERY_DENOMINATOR)
}

pub fn metaphor_density(text: &str) -> f64 {
    ratio(count_matches(&METAPHOR, text), METAPHOR_DENOMINATOR)
}

pub fn glyph_usage(text: &str) -> f64 {
    let hits = text
        .chars()
        .filter(|c| lexicon::GLYPH_CLASSES.iter().any(|class| class.contains(c)))
        .count();
    ratio(hits, GLYPH_DENOMINATOR)
}

pub fn archetypes(lower: &str) -> ArchetypeScore {
    let mut detected = Vec::new();
    let mut total = 0;

    for (theme, words) in lexicon::ARCHETYPES {
        let hits = count_keywords(lower, words);
        if hits > 0 {
            detected.push(ThemeStrength {
                theme: theme.to_string(),
                strength: ratio(hits, words.len() as f64),
            });
            total += hits;
        }
    }

    ArchetypeScore {
        detected,
        score: ratio(total, ARCHETYPE_DENOMINATOR),
    }
}

pub fn emotional_evocation(lower: &str) -> EmotionScore {
    let mut emotions = BTreeMap::new();
    let mut total = 0;

    for (theme, words) in lexicon::EMOTIONS {
        let hits = count_keywords(lower, words);
        if hits > 0 {
            emotions.insert(theme.to_string(), ratio(hits, words.len() as f64));
            total += hits;
        }
    }

    EmotionScore {
        emotions,
        overall_strength: ratio(total, EMOTION_DENOMINATOR),
    }
}
