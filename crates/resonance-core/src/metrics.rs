use std::collections::BTreeMap;

use crate::ledger::DriftLedger;
use crate::model::{AffectFootprint, ResonanceSnapshot, Scroll};
use crate::registry::ScrollRegistry;

/// Build a fresh snapshot from the current registry and ledger.
pub fn snapshot(
    registry: &ScrollRegistry,
    ledger: &DriftLedger,
    drift_window: usize,
) -> ResonanceSnapshot {
    ResonanceSnapshot {
        echo_depth: aggregate_echo_depth(registry.iter()),
        resonant_drift: aggregate_resonant_drift(ledger, drift_window),
        affect_footprint: aggregate_affect_footprint(registry.iter()),
        active_scroll_count: registry.len(),
    }
}

pub fn aggregate_echo_depth<'a>(
    scrolls: impl Iterator<Item = &'a Scroll>,
) -> BTreeMap<String, f64> {
    let mut totals = BTreeMap::new();
    for scroll in scrolls {
        *totals.entry(scroll.agent.to_string()).or_insert(0.0) += scroll.echo_depth;
    }
    totals
}

/// Summed strength per directed `"from-to"` pair over the last `window` records.
pub fn aggregate_resonant_drift(ledger: &DriftLedger, window: usize) -> BTreeMap<String, f64> {
    let mut totals = BTreeMap::new();
    for drift in ledger.recent(window) {
        *totals.entry(drift.pair_key()).or_insert(0.0) += drift.strength;
    }
    totals
}

/// Normalized sum of scroll footprints. All zero when there are no scrolls.
pub fn aggregate_affect_footprint<'a>(
    scrolls: impl Iterator<Item = &'a Scroll>,
) -> AffectFootprint {
    scrolls
        .map(|scroll| scroll.affect_footprint)
        .fold(AffectFootprint::default(), |acc, fp| acc + fp)
        .normalized()
}
