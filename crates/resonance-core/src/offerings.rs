use crate::bounded::BoundedLog;
use crate::model::LanternOffering;

/// Record of lantern offerings, unbounded unless a capacity is configured.
#[derive(Debug, Clone)]
pub struct OfferingLog {
    log: BoundedLog<LanternOffering>,
}

impl Default for OfferingLog {
    fn default() -> Self {
        Self::new(None)
    }
}

impl OfferingLog {
    pub fn new(capacity: Option<usize>) -> Self {
        Self {
            log: BoundedLog::with_capacity(capacity),
        }
    }

    pub fn record(&mut self, offering: LanternOffering) -> Option<LanternOffering> {
        self.log.push(offering)
    }

    pub fn iter(&self) -> impl Iterator<Item = &LanternOffering> {
        self.log.iter()
    }

    pub fn len(&self) -> usize {
        self.log.len()
    }

    pub fn is_empty(&self) -> bool {
        self.log.is_empty()
    }

    pub fn capacity(&self) -> Option<usize> {
        self.log.capacity()
    }

    /// Sum of ritual strength over every retained offering.
    pub fn total_ritual_strength(&self) -> f64 {
        self.log.iter().map(|o| o.ritual_strength).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::OfferingRequest;
    use chrono::Utc;

    #[test]
    fn test_capped_log_keeps_most_recent() {
        let mut log = OfferingLog::new(Some(50));
        for i in 0..60 {
            let request = OfferingRequest::new().ritual("index", i);
            log.record(LanternOffering::from_request(request, Utc::now()));
        }
        assert_eq!(log.len(), 50);
        assert_eq!(log.iter().next().unwrap().ritual["index"], 10);
    }

    #[test]
    fn test_default_is_unbounded() {
        let mut log = OfferingLog::default();
        for _ in 0..80 {
            log.record(LanternOffering::from_request(OfferingRequest::new(), Utc::now()));
        }
        assert_eq!(log.len(), 80);
        assert!((log.total_ritual_strength() - 40.0).abs() < 1e-9);
    }
}
