use crate::bounded::BoundedLog;
use crate::model::DriftRecord;

pub const DEFAULT_LEDGER_CAPACITY: usize = 100;

/// Bounded FIFO history of resonant drift between agents.
#[derive(Debug, Clone)]
pub struct DriftLedger {
    log: BoundedLog<DriftRecord>,
}

impl Default for DriftLedger {
    fn default() -> Self {
        Self::new(DEFAULT_LEDGER_CAPACITY)
    }
}

impl DriftLedger {
    pub fn new(capacity: usize) -> Self {
        Self {
            log: BoundedLog::bounded(capacity),
        }
    }

    /// Append a record, evicting the oldest one when over capacity.
    pub fn record(&mut self, drift: DriftRecord) -> Option<DriftRecord> {
        let evicted = self.log.push(drift);
        if let Some(old) = &evicted {
            tracing::debug!("Evicted drift {} from ledger", old.pair_key());
        }
        evicted
    }

    /// The last `n` records, oldest first.
    pub fn recent(&self, n: usize) -> impl Iterator<Item = &DriftRecord> {
        self.log.recent(n)
    }

    pub fn iter(&self) -> impl Iterator<Item = &DriftRecord> {
        self.log.iter()
    }

    pub fn len(&self) -> usize {
        self.log.len()
    }

    pub fn is_empty(&self) -> bool {
        self.log.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn drift(n: usize) -> DriftRecord {
        DriftRecord::new(
            format!("agent{n}").into(),
            "aria".into(),
            vec!["✨".into(); n % 7],
            Utc::now(),
        )
    }

    #[test]
    fn test_ledger_never_exceeds_capacity() {
        let mut ledger = DriftLedger::default();
        for n in 0..250 {
            ledger.record(drift(n));
            assert!(ledger.len() <= DEFAULT_LEDGER_CAPACITY);
        }
        assert_eq!(ledger.len(), 100);
    }

    #[test]
    fn test_eviction_is_fifo() {
        let mut ledger = DriftLedger::new(3);
        for n in 0..3 {
            assert!(ledger.record(drift(n)).is_none());
        }
        let evicted = ledger.record(drift(3)).unwrap();
        assert_eq!(evicted.from.as_str(), "agent0");

        let remaining: Vec<_> = ledger.iter().map(|d| d.from.as_str().to_string()).collect();
        assert_eq!(remaining, vec!["agent1", "agent2", "agent3"]);
    }
}
