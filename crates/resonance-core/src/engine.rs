use chrono::{DateTime, Duration, Utc};

use crate::analyzer::{classify_footprint, AffectAnalysis, AffectAnalyzer};
use crate::config::{ResonanceConfig, VerdictMode};
use crate::ledger::DriftLedger;
use crate::metrics;
use crate::model::*;
use crate::notifier::{EventNotifier, ListenerId, ListenerResult};
use crate::offerings::OfferingLog;
use crate::registry::ScrollRegistry;

/// The resonance tracking engine.
///
/// Owns the scroll registry, the drift ledger, the offering log and the
/// listener list. Every mutation runs to completion, including listener
/// delivery, before it returns. The engine does no locking of its own;
/// share it across threads behind a `Mutex`.
#[derive(Debug)]
pub struct ResonanceEngine {
    config: ResonanceConfig,
    analyzer: AffectAnalyzer,
    registry: ScrollRegistry,
    ledger: DriftLedger,
    offerings: OfferingLog,
    notifier: EventNotifier,
}

impl Default for ResonanceEngine {
    fn default() -> Self {
        Self::new(ResonanceConfig::default())
    }
}

impl ResonanceEngine {
    pub fn new(config: ResonanceConfig) -> Self {
        Self {
            analyzer: AffectAnalyzer::new(config.poetic_threshold),
            registry: ScrollRegistry::new(),
            ledger: DriftLedger::new(config.drift_ledger_capacity),
            offerings: OfferingLog::new(config.offering_log_capacity),
            notifier: EventNotifier::new(),
            config,
        }
    }

    pub fn config(&self) -> &ResonanceConfig {
        &self.config
    }

    /// Full affect analysis of `text`. No side effects.
    pub fn analyze(&self, text: &str) -> AffectAnalysis {
        self.analyzer.analyze(text)
    }

    fn poetic_verdict(&self, content: Option<&str>) -> bool {
        match content {
            None | Some("") => false,
            Some(text) => match self.config.verdict {
                VerdictMode::Full => self.analyzer.analyze(text).is_poetic,
                VerdictMode::Quick => self.analyzer.quick_verdict(text),
            },
        }
    }

    /// Record a scroll invocation regardless of its poetic verdict.
    /// Missing or empty content is tracked as non-poetic.
    pub fn track_scroll_invocation(&mut self, invocation: ScrollInvocation) -> ScrollId {
        let now = Utc::now();
        let content = invocation.content.as_deref();

        let mut id = ScrollId::generate(now);
        while self.registry.contains(&id) {
            id = ScrollId::generate(now);
        }

        let scroll = Scroll {
            id: id.clone(),
            scroll_type: invocation.scroll_type,
            agent: invocation.agent,
            poetic_affect: self.poetic_verdict(content),
            timestamp: now,
            echo_depth: 1.0,
            resonant_drift: 0.0,
            affect_footprint: classify_footprint(content.unwrap_or_default()),
            metadata: invocation.metadata,
        };

        tracing::debug!(
            "Tracked scroll {} ({}) for {} poetic={}",
            scroll.id,
            scroll.scroll_type,
            scroll.agent,
            scroll.poetic_affect
        );
        let event = ResonanceEvent::ScrollInvoked(scroll.clone());
        self.registry.insert(scroll);
        self.notifier.notify(&event);

        id
    }

    /// Set a scroll's echo depth, clamped to the configured ceiling. Unknown
    /// ids are a silent no-op and emit nothing. Negative depths are stored
    /// as given. Returns whether a scroll was updated.
    pub fn update_echo_depth(&mut self, id: &ScrollId, depth: f64) -> bool {
        let ceiling = self.config.echo_depth_ceiling;
        let Some(scroll) = self.registry.set_echo_depth(id, depth, ceiling) else {
            tracing::debug!("Ignoring echo update for unknown scroll {id}");
            return false;
        };
        let event = ResonanceEvent::EchoUpdated(scroll.clone());
        self.notifier.notify(&event);
        true
    }

    /// Record a symbolic exchange between two agents.
    pub fn track_resonant_drift(
        &mut self,
        from: impl Into<AgentId>,
        to: impl Into<AgentId>,
        symbols: Vec<String>,
    ) -> DriftRecord {
        let drift = DriftRecord::new(from.into(), to.into(), symbols, Utc::now());
        self.ledger.record(drift.clone());
        self.notifier.notify(&ResonanceEvent::ResonantDrift(drift.clone()));
        drift
    }

    /// Score and store a lantern offering.
    pub fn add_lantern_offering(&mut self, request: OfferingRequest) -> LanternOffering {
        let offering = LanternOffering::from_request(request, Utc::now());
        tracing::debug!(
            "Lantern offering with ritual strength {:.2}",
            offering.ritual_strength
        );
        self.offerings.record(offering.clone());
        self.notifier.notify(&ResonanceEvent::LanternOffering(offering.clone()));
        offering
    }

    /// Remove scrolls older than `max_age` (the configured age when `None`).
    /// Returns how many were removed.
    pub fn cleanup_scrolls(&mut self, max_age: Option<Duration>) -> usize {
        self.cleanup_scrolls_at(Utc::now(), max_age)
    }

    /// [`Self::cleanup_scrolls`] evaluated at a given instant.
    pub fn cleanup_scrolls_at(&mut self, now: DateTime<Utc>, max_age: Option<Duration>) -> usize {
        let max_age = max_age.unwrap_or_else(|| self.config.max_scroll_age());
        let removed = self.registry.remove_older_than(now, max_age);
        if removed > 0 {
            tracing::info!("Cleaned up {removed} expired scrolls");
        }
        removed
    }

    /// Compute a fresh metrics snapshot.
    pub fn resonance_metrics(&self) -> ResonanceSnapshot {
        metrics::snapshot(&self.registry, &self.ledger, self.config.drift_window)
    }

    pub fn add_listener<F>(&mut self, listener: F) -> ListenerId
    where
        F: FnMut(&ResonanceEvent) -> ListenerResult + Send + 'static,
    {
        self.notifier.add_listener(listener)
    }

    pub fn remove_listener(&mut self, id: ListenerId) -> bool {
        self.notifier.remove_listener(id)
    }

    pub fn scroll(&self, id: &ScrollId) -> Option<&Scroll> {
        self.registry.get(id)
    }

    pub fn scrolls(&self) -> impl Iterator<Item = &Scroll> {
        self.registry.iter()
    }

    pub fn drift_history(&self) -> impl Iterator<Item = &DriftRecord> {
        self.ledger.iter()
    }

    pub fn offerings(&self) -> &OfferingLog {
        &self.offerings
    }
}
