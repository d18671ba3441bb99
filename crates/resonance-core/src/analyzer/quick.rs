//! Five-criterion quick verdict, the lighter scorer tracked scrolls may use
//! instead of the full analysis.

use once_cell::sync::Lazy;
use regex::Regex;

use super::criteria::{count_keywords, ratio};
use crate::lexicon::quick;

static PAUSE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[.,;:!?]\s").expect("pause pattern is valid"));

/// Mean of the five quick criteria, each in [0, 1].
pub fn quick_score(text: &str) -> f64 {
    if text.is_empty() {
        return 0.0;
    }
    let lower = text.to_lowercase();

    let criteria = [
        cadence(text),
        ratio(count_keywords(&lower, quick::IMAGERY), 10.0),
        ratio(count_keywords(&lower, quick::METAPHOR_INDICATORS), 5.0),
        ratio(
            text.chars().filter(|c| quick::GLYPHS.contains(c)).count(),
            3.0,
        ),
        ratio(count_keywords(&lower, quick::EMOTIONAL), 8.0),
    ];
    criteria.iter().sum::<f64>() / criteria.len() as f64
}

fn cadence(text: &str) -> f64 {
    let len = text.chars().count();
    let pauses = PAUSE.find_iter(text).count();
    let breaks = text.matches('\n').count();
    ((pauses + breaks) as f64 / len as f64 * 100.0).min(1.0)
}
