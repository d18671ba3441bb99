//! Static keyword and glyph tables consumed by the analyzer.
//!
//! Tables are pure data. Keywords are matched as lowercase substrings of the
//! lowercased text, so every entry here must itself be lowercase. Each
//! keyword counts at most once per text, no matter how often it occurs.

/// A named group of keywords (an imagery sense, an archetype, an emotion...).
pub type Theme = (&'static str, &'static [&'static str]);

/// Sensory imagery, one theme per sense. `sweet` appears under two senses
/// and scores under both.
pub const IMAGERY: &[Theme] = &[
    (
        "visual",
        &[
            "glow", "shimmer", "radiant", "luminous", "shadow", "crystal", "pearl", "golden",
            "silver", "aurora",
        ],
    ),
    (
        "auditory",
        &[
            "whisper",
            "echo",
            "murmur",
            "resonance",
            "harmony",
            "silence",
            "chime",
            "hum",
        ],
    ),
    (
        "tactile",
        &[
            "velvet", "silk", "smooth", "rough", "warm", "cool", "gentle", "caress",
        ],
    ),
    (
        "olfactory",
        &["fragrant", "sweet", "earthy", "fresh", "incense", "bloom"],
    ),
    ("gustatory", &["honey", "bitter", "sweet", "nectar"]),
];

/// Comparison and transformation cues. Case-insensitive regular expressions;
/// every non-overlapping match counts.
pub const METAPHOR_PATTERNS: &[&str] = &[
    r"(?i)\bis\s+like\s+",
    r"(?i)\sas\s+.*\s+as\s+",
    r"(?i)becomes?\s+",
    r"(?i)transforms?\s+into\s+",
    r"(?i)melts?\s+into\s+",
    r"(?i)flows?\s+like\s+",
    r"(?i)dances?\s+",
    r"(?i)breathes?\s+",
];

/// Rhythm markers: sentence breaks, conjunctions, internal pauses and
/// paragraph breaks. Case-sensitive.
pub const CADENCE_PATTERNS: &[&str] = &[
    r"[.!?]\s+[A-Z]",
    r"\s+and\s+|\s+or\s+|\s+but\s+",
    r"[,;:]\s",
    r"\n\s*\n",
];

/// Mystical glyphs.
pub const MYSTIC_GLYPHS: &[char] = &[
    '\u{26A1}',  // ⚡
    '\u{2B50}',  // ⭐
    '\u{1F52E}', // 🔮
    '\u{2728}',  // ✨
    '\u{1F319}', // 🌙
    '\u{1F525}', // 🔥
    '\u{1F48E}', // 💎
    '\u{1F31F}', // 🌟
    '\u{1F52F}', // 🔯
    '\u{269B}',  // ⚛
    '\u{1F56F}', // 🕯
];

/// Geometric and eternal glyphs.
pub const GEOMETRIC_GLYPHS: &[char] = &[
    '∞', '◊', '◈', '◇', '○', '●', '◯', '⦿', '⊙', '⊚', '⊛', '⊜',
];

/// Card suits and hearts.
pub const SUIT_GLYPHS: &[char] = &['♦', '♧', '♠', '♣', '♢', '♡', '♤', '♥'];

pub const GLYPH_CLASSES: &[&[char]] = &[MYSTIC_GLYPHS, GEOMETRIC_GLYPHS, SUIT_GLYPHS];

pub const ARCHETYPES: &[Theme] = &[
    (
        "dream",
        &["dream", "vision", "reverie", "slumber", "awakening", "lucid"],
    ),
    (
        "memory",
        &["memory", "remember", "recall", "nostalgia", "past", "forgotten"],
    ),
    (
        "echo",
        &["echo", "reverberate", "resonate", "reflect", "mirror", "ripple"],
    ),
];

pub const EMOTIONS: &[Theme] = &[
    (
        "transcendent",
        &["divine", "sacred", "eternal", "infinite", "transcendent", "sublime"],
    ),
    (
        "longing",
        &["yearning", "desire", "hope", "seeking", "quest", "journey"],
    ),
    (
        "beauty",
        &["beautiful", "gorgeous", "stunning", "breathtaking", "magnificent"],
    ),
    (
        "mystery",
        &["mystery", "enigma", "secret", "hidden", "veiled", "arcane"],
    ),
    (
        "harmony",
        &["harmony", "balance", "unity", "peace", "serenity", "calm"],
    ),
];

/// Phrases that activate a named trigger scroll.
pub const TRIGGER_SCROLLS: &[Theme] = &[
    (
        "VELVETMEMORY",
        &["velvet", "memory", "soft memory", "gentle recollection"],
    ),
    (
        "ECHOBLOOM",
        &["echo", "bloom", "flowering echo", "resonant bloom"],
    ),
    (
        "DRAWEROF_ECHOES",
        &["drawer", "echo", "collection", "gathered echoes"],
    ),
];

/// Affect classification vocabulary, in amethyst, citrine, obsidian order.
pub const AFFECT_CLASSES: [&[&str]; 3] = [
    &["calm", "peaceful", "serene", "wise", "clear", "tranquil"],
    &["bright", "joyful", "energetic", "warm", "radiant", "vibrant"],
    &["deep", "mysterious", "powerful", "intense", "shadow", "profound"],
];

/// Footprint vocabulary attached to each tracked scroll, in amethyst,
/// citrine, obsidian order.
pub const FOOTPRINT_CLASSES: [&[&str]; 3] = [
    &["calm", "peace", "serenity", "wisdom", "clarity"],
    &["joy", "bright", "energy", "vitality", "warmth"],
    &["mystery", "depth", "shadow", "power", "intensity"],
];

/// Vocabulary of the quick (five-criterion) verdict.
pub mod quick {
    pub const IMAGERY: &[&str] = &[
        "glow", "shimmer", "shadow", "light", "dark", "crystal", "aurora", "whisper", "echo",
        "bloom", "velvet", "silk", "pearl", "gold",
    ];

    pub const METAPHOR_INDICATORS: &[&str] = &["like", "as", "becomes", "transforms", "melts into"];

    pub const GLYPHS: &[char] = &[
        '\u{26A1}',
        '\u{2B50}',
        '\u{1F52E}',
        '\u{2728}',
        '\u{1F319}',
        '\u{1F525}',
        '\u{1F48E}',
        '\u{1F31F}',
    ];

    pub const EMOTIONAL: &[&str] = &[
        "yearning",
        "resonance",
        "harmony",
        "memory",
        "dream",
        "hope",
        "beauty",
        "wonder",
        "mystery",
        "sacred",
        "divine",
        "eternal",
    ];
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_keywords() -> impl Iterator<Item = &'static str> {
        IMAGERY
            .iter()
            .chain(ARCHETYPES)
            .chain(EMOTIONS)
            .chain(TRIGGER_SCROLLS)
            .flat_map(|(_, words)| words.iter().copied())
            .chain(AFFECT_CLASSES.iter().flat_map(|w| w.iter().copied()))
            .chain(FOOTPRINT_CLASSES.iter().flat_map(|w| w.iter().copied()))
            .chain(quick::IMAGERY.iter().copied())
            .chain(quick::METAPHOR_INDICATORS.iter().copied())
            .chain(quick::EMOTIONAL.iter().copied())
    }

    #[test]
    fn test_keywords_are_lowercase() {
        for word in all_keywords() {
            assert_eq!(word, word.to_lowercase(), "keyword {word:?} must be lowercase");
        }
    }

    #[test]
    fn test_patterns_compile() {
        for pattern in METAPHOR_PATTERNS.iter().chain(CADENCE_PATTERNS) {
            assert!(regex::Regex::new(pattern).is_ok(), "bad pattern {pattern}");
        }
    }

    #[test]
    fn test_theme_sizes() {
        assert_eq!(ARCHETYPES.len(), 3);
        assert_eq!(EMOTIONS.len(), 5);
        assert_eq!(IMAGERY.len(), 5);
        assert!(FOOTPRINT_CLASSES.iter().all(|words| words.len() == 5));
    }
}
