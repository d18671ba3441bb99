use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::scroll::AgentId;

/// One observed symbolic exchange between two agents.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DriftRecord {
    pub from: AgentId,
    pub to: AgentId,
    pub symbols: Vec<String>,
    pub timestamp: DateTime<Utc>,
    pub strength: f64,
}

impl DriftRecord {
    pub fn new(from: AgentId, to: AgentId, symbols: Vec<String>, timestamp: DateTime<Utc>) -> Self {
        let strength = drift_strength(&symbols);
        Self {
            from,
            to,
            symbols,
            timestamp,
            strength,
        }
    }

    /// Directed aggregation key, `"<from>-<to>"`.
    pub fn pair_key(&self) -> String {
        format!("{}-{}", self.from, self.to)
    }
}

/// Ten symbols make a drift of strength 1. Not capped.
pub fn drift_strength(symbols: &[String]) -> f64 {
    symbols.len() as f64 / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strength_is_symbol_count_over_ten() {
        let symbols: Vec<String> = ["✨", "🔮", "🌙"].iter().map(|s| s.to_string()).collect();
        let record = DriftRecord::new("oracle".into(), "aria".into(), symbols, Utc::now());
        assert!((record.strength - 0.3).abs() < 1e-12);
        assert_eq!(record.pair_key(), "oracle-aria");
        assert_eq!(drift_strength(&[]), 0.0);
    }
}
