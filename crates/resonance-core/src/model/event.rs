use serde::{Deserialize, Serialize};

use super::drift::DriftRecord;
use super::offering::LanternOffering;
use super::scroll::Scroll;

/// Notification emitted after every engine mutation. Payloads are copies.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "event", content = "payload", rename_all = "snake_case")]
pub enum ResonanceEvent {
    ScrollInvoked(Scroll),
    EchoUpdated(Scroll),
    ResonantDrift(DriftRecord),
    LanternOffering(LanternOffering),
}

impl ResonanceEvent {
    pub fn name(&self) -> &'static str {
        match self {
            ResonanceEvent::ScrollInvoked(_) => "scroll_invoked",
            ResonanceEvent::EchoUpdated(_) => "echo_updated",
            ResonanceEvent::ResonantDrift(_) => "resonant_drift",
            ResonanceEvent::LanternOffering(_) => "lantern_offering",
        }
    }

    /// The scroll carried by scroll events.
    pub fn scroll(&self) -> Option<&Scroll> {
        match self {
            ResonanceEvent::ScrollInvoked(scroll) | ResonanceEvent::EchoUpdated(scroll) => {
                Some(scroll)
            }
            _ => None,
        }
    }
}
