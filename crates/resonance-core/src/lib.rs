//! In-process engine that scores short "scroll" invocations from named agents
//! against a heuristic linguistic-affect model and keeps rolling resonance
//! metrics (echo depth, resonant drift, affect footprint, ritual strength).
//!
//! # Example
//! ```
//! use resonance_core::{ResonanceConfig, ResonanceEngine, ScrollInvocation};
//!
//! let mut engine = ResonanceEngine::new(ResonanceConfig::default());
//! let id = engine.track_scroll_invocation(ScrollInvocation::new(
//!     "VELVETMEMORY",
//!     "oracle",
//!     "The velvet memory whispers through crystalline echoes",
//! ));
//! engine.update_echo_depth(&id, 3.0);
//! let snapshot = engine.resonance_metrics();
//! assert_eq!(snapshot.active_scroll_count, 1);
//! assert_eq!(snapshot.echo_depth["oracle"], 3.0);
//! ```

pub mod analyzer;
pub mod bounded;
pub mod config;
pub mod engine;
pub mod error;
pub mod ledger;
pub mod lexicon;
pub mod metrics;
pub mod model;
pub mod notifier;
pub mod offerings;
pub mod registry;

pub use analyzer::{analyze, classify_footprint, AffectAnalysis, AffectAnalyzer};
pub use config::{ResonanceConfig, VerdictMode};
pub use engine::ResonanceEngine;
pub use error::CoreError;
pub use model::{
    AffectFootprint, AgentId, DriftRecord, LanternOffering, Mood, OfferingRequest,
    ResonanceEvent, ResonanceSnapshot, Scroll, ScrollId, ScrollInvocation,
};
pub use notifier::{ListenerId, ListenerResult};
