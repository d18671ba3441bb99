use std::collections::HashMap;

use chrono::{DateTime, Duration, Utc};

use crate::model::{Scroll, ScrollId};

/// Keyed store of active scrolls.
#[derive(Debug, Default)]
pub struct ScrollRegistry {
    scrolls: HashMap<ScrollId, Scroll>,
}

impl ScrollRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, scroll: Scroll) {
        self.scrolls.insert(scroll.id.clone(), scroll);
    }

    pub fn contains(&self, id: &ScrollId) -> bool {
        self.scrolls.contains_key(id)
    }

    pub fn get(&self, id: &ScrollId) -> Option<&Scroll> {
        self.scrolls.get(id)
    }

    pub fn len(&self) -> usize {
        self.scrolls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scrolls.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Scroll> {
        self.scrolls.values()
    }

    /// Set the echo depth, clamped from above only. Unknown ids are ignored.
    pub fn set_echo_depth(&mut self, id: &ScrollId, depth: f64, ceiling: f64) -> Option<&Scroll> {
        let scroll = self.scrolls.get_mut(id)?;
        scroll.echo_depth = depth.min(ceiling);
        Some(scroll)
    }

    /// Remove every scroll older than `max_age` at `now`. A scroll exactly
    /// `max_age` old is kept.
    pub fn remove_older_than(&mut self, now: DateTime<Utc>, max_age: Duration) -> usize {
        let before = self.scrolls.len();
        self.scrolls
            .retain(|_, scroll| now.signed_duration_since(scroll.timestamp) <= max_age);
        before - self.scrolls.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{AffectFootprint, AgentId};

    fn scroll_at(timestamp: DateTime<Utc>) -> Scroll {
        Scroll {
            id: ScrollId::generate(timestamp),
            scroll_type: "GENERAL".into(),
            agent: AgentId::from("capri"),
            poetic_affect: false,
            timestamp,
            echo_depth: 1.0,
            resonant_drift: 0.0,
            affect_footprint: AffectFootprint::NEUTRAL,
            metadata: Default::default(),
        }
    }

    #[test]
    fn test_echo_depth_clamped_above_only() {
        let mut registry = ScrollRegistry::new();
        let scroll = scroll_at(Utc::now());
        let id = scroll.id.clone();
        registry.insert(scroll);

        assert_eq!(registry.set_echo_depth(&id, 7.0, 5.0).unwrap().echo_depth, 5.0);
        assert_eq!(registry.set_echo_depth(&id, 2.5, 5.0).unwrap().echo_depth, 2.5);
        assert_eq!(registry.set_echo_depth(&id, -1.0, 5.0).unwrap().echo_depth, -1.0);
        assert!(registry
            .set_echo_depth(&ScrollId::from("missing"), 3.0, 5.0)
            .is_none());
    }

    #[test]
    fn test_remove_older_than_keeps_boundary() {
        let now = Utc::now();
        let max_age = Duration::hours(1);
        let mut registry = ScrollRegistry::new();

        let fresh = scroll_at(now - Duration::minutes(5));
        let boundary = scroll_at(now - max_age);
        let stale = scroll_at(now - max_age - Duration::milliseconds(1));
        let (fresh_id, boundary_id, stale_id) =
            (fresh.id.clone(), boundary.id.clone(), stale.id.clone());
        registry.insert(fresh);
        registry.insert(boundary);
        registry.insert(stale);

        assert_eq!(registry.remove_older_than(now, max_age), 1);
        assert!(registry.contains(&fresh_id));
        assert!(registry.contains(&boundary_id));
        assert!(!registry.contains(&stale_id));
        assert_eq!(registry.remove_older_than(now, max_age), 0);
    }
}
