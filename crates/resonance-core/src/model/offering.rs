use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

const BASE_STRENGTH: f64 = 0.5;
const INTENTION_MULTIPLIER: f64 = 1.5;
const MAX_RITUAL_STRENGTH: f64 = 2.0;

/// A lantern offering as submitted by a caller. Any fields besides
/// `intention` and `duration` are kept as ritual metadata.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct OfferingRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intention: Option<String>,
    /// Seconds spent on the ritual.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<f64>,
    #[serde(flatten)]
    pub ritual: serde_json::Map<String, serde_json::Value>,
}

impl OfferingRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn intention(mut self, intention: &str) -> Self {
        self.intention = Some(intention.to_string());
        self
    }

    pub fn duration(mut self, seconds: f64) -> Self {
        self.duration = Some(seconds);
        self
    }

    pub fn ritual(mut self, key: &str, value: impl Into<serde_json::Value>) -> Self {
        self.ritual.insert(key.to_string(), value.into());
        self
    }

    /// `min(0.5 * intention * duration, 2.0)`. The intention multiplier is
    /// 1.5 for a non-empty intention; the duration multiplier is minutes
    /// spent for a non-zero duration. Absent values count as 1.
    pub fn ritual_strength(&self) -> f64 {
        let intention = match self.intention.as_deref() {
            Some(text) if !text.is_empty() => INTENTION_MULTIPLIER,
            _ => 1.0,
        };
        let duration = match self.duration {
            Some(seconds) if seconds != 0.0 && !seconds.is_nan() => seconds / 60.0,
            _ => 1.0,
        };
        (BASE_STRENGTH * intention * duration).min(MAX_RITUAL_STRENGTH)
    }
}

/// A stored ritual-engagement event.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LanternOffering {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intention: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<f64>,
    #[serde(flatten)]
    pub ritual: serde_json::Map<String, serde_json::Value>,
    pub timestamp: DateTime<Utc>,
    pub ritual_strength: f64,
}

impl LanternOffering {
    pub fn from_request(request: OfferingRequest, timestamp: DateTime<Utc>) -> Self {
        let ritual_strength = request.ritual_strength();
        Self {
            intention: request.intention,
            duration: request.duration,
            ritual: request.ritual,
            timestamp,
            ritual_strength,
        }
    }
}
