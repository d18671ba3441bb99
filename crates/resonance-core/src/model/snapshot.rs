use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::scroll::AffectFootprint;

/// A computed read view over the engine state. Owned by the caller.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ResonanceSnapshot {
    /// Summed echo depth of active scrolls, per agent.
    pub echo_depth: BTreeMap<String, f64>,
    /// Summed drift strength over the recent ledger window, per `"from-to"`.
    pub resonant_drift: BTreeMap<String, f64>,
    /// Normalized mean footprint of active scrolls; all zero when none.
    pub affect_footprint: AffectFootprint,
    pub active_scroll_count: usize,
}
