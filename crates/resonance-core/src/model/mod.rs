pub mod drift;
pub mod event;
pub mod offering;
pub mod scroll;
pub mod snapshot;

pub use drift::DriftRecord;
pub use event::ResonanceEvent;
pub use offering::{LanternOffering, OfferingRequest};
pub use scroll::{AffectFootprint, AgentId, Mood, Scroll, ScrollId, ScrollInvocation, KNOWN_AGENTS};
pub use snapshot::ResonanceSnapshot;
