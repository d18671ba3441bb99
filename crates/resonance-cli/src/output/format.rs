use resonance_core::model::{AffectFootprint, Mood, ResonanceSnapshot};
use resonance_core::AffectAnalysis;

use super::OutputFormat;

pub fn format_analysis(analysis: &AffectAnalysis, threshold: f64, fmt: OutputFormat) -> String {
    match fmt {
        OutputFormat::Json => serde_json::to_string_pretty(analysis).unwrap_or_default(),
        OutputFormat::Text => format_analysis_text(analysis, threshold),
    }
}

fn format_analysis_text(analysis: &AffectAnalysis, threshold: f64) -> String {
    let c = &analysis.criteria;
    let mut out = String::new();

    out.push_str(&format!(
        "Poetic:     {} (score {:.2}, threshold {threshold:.2})\n",
        if analysis.is_poetic { "yes" } else { "no" },
        analysis.overall_score
    ));
    out.push_str(&format!("Cadence:    {:.2}\n", c.cadence));
    out.push_str(&format!("Imagery:    {:.2}\n", c.imagery));
    out.push_str(&format!("Metaphor:   {:.2}\n", c.metaphor_density));
    out.push_str(&format!("Glyphs:     {:.2}\n", c.glyph_usage));

    let archetypes: Vec<String> = c
        .archetypes
        .detected
        .iter()
        .map(|t| format!("{} {:.2}", t.theme, t.strength))
        .collect();
    out.push_str(&format!(
        "Archetypes: {:.2}{}\n",
        c.archetypes.score,
        bracketed(&archetypes)
    ));

    let emotions: Vec<String> = c
        .emotional_evocation
        .emotions
        .iter()
        .map(|(theme, strength)| format!("{theme} {strength:.2}"))
        .collect();
    out.push_str(&format!(
        "Emotions:   {:.2}{}\n",
        c.emotional_evocation.overall_strength,
        bracketed(&emotions)
    ));

    if !analysis.trigger_scrolls.is_empty() {
        out.push_str(&format!(
            "Triggers:   {}\n",
            analysis.trigger_scrolls.join(", ")
        ));
    }

    let affect = &analysis.affect_classification;
    match affect.dominant {
        Some(mood) => out.push_str(&format!(
            "Affect:     {mood} (strength {:.2})\n",
            affect.strength
        )),
        None => out.push_str("Affect:     none\n"),
    }

    out
}

fn bracketed(items: &[String]) -> String {
    if items.is_empty() {
        String::new()
    } else {
        format!(" [{}]", items.join(", "))
    }
}

pub fn format_footprint(fp: &AffectFootprint, fmt: OutputFormat) -> String {
    match fmt {
        OutputFormat::Json => serde_json::to_string_pretty(fp).unwrap_or_default(),
        OutputFormat::Text => format_footprint_text(fp),
    }
}

fn format_footprint_text(fp: &AffectFootprint) -> String {
    Mood::ALL
        .iter()
        .map(|&mood| format!("  {:<9} {:.2}\n", format!("{mood}:"), fp.get(mood)))
        .collect()
}

pub fn format_snapshot_text(snapshot: &ResonanceSnapshot) -> String {
    let mut out = String::new();
    out.push_str("Resonance Snapshot\n");
    out.push_str("==================\n");
    out.push_str(&format!(
        "Active scrolls: {}\n",
        snapshot.active_scroll_count
    ));

    out.push_str("\nEcho Depth:\n");
    if snapshot.echo_depth.is_empty() {
        out.push_str("  (none)\n");
    }
    for (agent, depth) in &snapshot.echo_depth {
        out.push_str(&format!("  {agent}: {depth:.2}\n"));
    }

    out.push_str("\nResonant Drift:\n");
    if snapshot.resonant_drift.is_empty() {
        out.push_str("  (none)\n");
    }
    for (pair, strength) in &snapshot.resonant_drift {
        out.push_str(&format!("  {pair}: {strength:.2}\n"));
    }

    out.push_str("\nAffect Footprint:\n");
    out.push_str(&format_footprint_text(&snapshot.affect_footprint));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use resonance_core::analyze;

    #[test]
    fn test_analysis_text_lists_criteria() {
        let analysis = analyze("A deep, powerful echo of a dream");
        let text = format_analysis(&analysis, 0.6, OutputFormat::Text);
        assert!(text.starts_with("Poetic:     no"));
        assert!(text.contains("Archetypes: 0.40 [dream 0.17, echo 0.17]"));
        assert!(text.contains("Triggers:   ECHOBLOOM, DRAWEROF_ECHOES"));
        assert!(text.contains("Affect:     obsidian (strength 0.67)"));
    }

    #[test]
    fn test_footprint_text_aligns_moods() {
        let text = format_footprint(&AffectFootprint::NEUTRAL, OutputFormat::Text);
        assert_eq!(
            text,
            "  amethyst: 0.33\n  citrine:  0.33\n  obsidian: 0.34\n"
        );
    }

    #[test]
    fn test_empty_snapshot_text() {
        let text = format_snapshot_text(&ResonanceSnapshot::default());
        assert!(text.contains("Active scrolls: 0"));
        assert!(text.contains("Echo Depth:\n  (none)"));
        assert!(text.contains("amethyst: 0.00"));
    }
}
