use std::path::Path;

use chrono::Duration;
use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Which analyzer decides the `poetic_affect` flag of tracked scrolls.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerdictMode {
    /// Six-criterion analyzer.
    #[default]
    Full,
    /// Five-criterion quick verdict.
    Quick,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResonanceConfig {
    pub poetic_threshold: f64,
    pub echo_depth_ceiling: f64,
    pub max_scroll_age_ms: u64,
    pub drift_ledger_capacity: usize,
    pub drift_window: usize,
    /// Unbounded unless set. UI-facing containers keep 50.
    pub offering_log_capacity: Option<usize>,
    pub verdict: VerdictMode,
}

impl Default for ResonanceConfig {
    fn default() -> Self {
        Self {
            poetic_threshold: 0.6,
            echo_depth_ceiling: 5.0,
            max_scroll_age_ms: 24 * 60 * 60 * 1000,
            drift_ledger_capacity: 100,
            drift_window: 20,
            offering_log_capacity: None,
            verdict: VerdictMode::Full,
        }
    }
}

impl ResonanceConfig {
    /// Bound kept by dashboard state containers for their offering lists.
    pub const UI_OFFERING_LOG_CAPACITY: usize = 50;

    /// Read a JSON config file. Missing fields take their defaults.
    pub fn load(path: &Path) -> Result<Self, CoreError> {
        let data = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&data)?;
        config.validate()?;
        Ok(config)
    }

    /// Write the config as pretty JSON.
    pub fn save(&self, path: &Path) -> Result<(), CoreError> {
        self.validate()?;
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<(), CoreError> {
        if !(0.0..=1.0).contains(&self.poetic_threshold) {
            return Err(CoreError::Config(format!(
                "poetic_threshold must lie in [0, 1], got {}",
                self.poetic_threshold
            )));
        }
        if self.echo_depth_ceiling.is_nan() || self.echo_depth_ceiling < 0.0 {
            return Err(CoreError::Config(format!(
                "echo_depth_ceiling must be non-negative, got {}",
                self.echo_depth_ceiling
            )));
        }
        if i64::try_from(self.max_scroll_age_ms).is_err() {
            return Err(CoreError::Config(format!(
                "max_scroll_age_ms must be at most {}, got {}",
                i64::MAX,
                self.max_scroll_age_ms
            )));
        }
        if self.drift_ledger_capacity == 0 {
            return Err(CoreError::Config(
                "drift_ledger_capacity must be at least 1".into(),
            ));
        }
        if self.drift_window == 0 {
            return Err(CoreError::Config("drift_window must be at least 1".into()));
        }
        if self.offering_log_capacity == Some(0) {
            return Err(CoreError::Config(
                "offering_log_capacity must be at least 1 when set".into(),
            ));
        }
        Ok(())
    }

    /// Config with the offering log capped the way dashboards cap it.
    pub fn ui_bounded() -> Self {
        Self {
            offering_log_capacity: Some(Self::UI_OFFERING_LOG_CAPACITY),
            ..Self::default()
        }
    }

    /// Saturates at the largest representable duration.
    pub fn max_scroll_age(&self) -> Duration {
        i64::try_from(self.max_scroll_age_ms)
            .ok()
            .and_then(Duration::try_milliseconds)
            .unwrap_or(Duration::MAX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = ResonanceConfig::default();
        assert_eq!(config.poetic_threshold, 0.6);
        assert_eq!(config.echo_depth_ceiling, 5.0);
        assert_eq!(config.max_scroll_age(), Duration::hours(24));
        assert_eq!(config.drift_ledger_capacity, 100);
        assert_eq!(config.offering_log_capacity, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_save_load_roundtrip() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("resonance.json");

        let config = ResonanceConfig {
            poetic_threshold: 0.4,
            verdict: VerdictMode::Quick,
            ..ResonanceConfig::ui_bounded()
        };
        config.save(&path).unwrap();

        let loaded = ResonanceConfig::load(&path).unwrap();
        assert_eq!(loaded, config);
        assert_eq!(loaded.offering_log_capacity, Some(50));
    }

    #[test]
    fn test_partial_file_takes_defaults() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("resonance.json");
        std::fs::write(&path, r#"{"echo_depth_ceiling": 3.0}"#).unwrap();

        let loaded = ResonanceConfig::load(&path).unwrap();
        assert_eq!(loaded.echo_depth_ceiling, 3.0);
        assert_eq!(loaded.poetic_threshold, 0.6);
        assert_eq!(loaded.verdict, VerdictMode::Full);
    }

    #[test]
    fn test_invalid_values_rejected() {
        let bad_threshold = ResonanceConfig {
            poetic_threshold: 1.5,
            ..Default::default()
        };
        assert!(matches!(bad_threshold.validate(), Err(CoreError::Config(_))));

        let empty_ledger = ResonanceConfig {
            drift_ledger_capacity: 0,
            ..Default::default()
        };
        assert!(empty_ledger.validate().is_err());

        let empty_offerings = ResonanceConfig {
            offering_log_capacity: Some(0),
            ..Default::default()
        };
        assert!(empty_offerings.validate().is_err());
    }

    #[test]
    fn test_huge_scroll_age_saturates() {
        let config = ResonanceConfig {
            max_scroll_age_ms: u64::MAX,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(CoreError::Config(_))));
        assert_eq!(config.max_scroll_age(), Duration::MAX);

        let config = ResonanceConfig {
            max_scroll_age_ms: 1 << 63,
            ..Default::default()
        };
        assert!(config.validate().is_err());
        assert_eq!(config.max_scroll_age(), Duration::MAX);

        let config = ResonanceConfig {
            max_scroll_age_ms: i64::MAX as u64,
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_malformed_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("resonance.json");
        std::fs::write(&path, "not json").unwrap();
        assert!(matches!(
            ResonanceConfig::load(&path),
            Err(CoreError::Json(_))
        ));
    }
}
