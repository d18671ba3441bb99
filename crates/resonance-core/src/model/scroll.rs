use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Agents the original swarm is made of. The engine accepts any agent key;
/// this roster only backs [`AgentId::is_known`] and the gateway's checks.
pub const KNOWN_AGENTS: &[&str] = &["oracle", "capri", "gemini", "aria", "conjuror"];

/// A unique identifier for a tracked scroll.
/// Formatted as `scroll_<unix millis>_<9 hex chars>`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScrollId(pub String);

impl ScrollId {
    pub fn generate(at: DateTime<Utc>) -> Self {
        let suffix = Uuid::new_v4().as_simple().to_string();
        Self(format!("scroll_{}_{}", at.timestamp_millis(), &suffix[..9]))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ScrollId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ScrollId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Free-form agent key. Not validated against [`KNOWN_AGENTS`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AgentId(pub String);

impl AgentId {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the agent (case-insensitive) belongs to the known roster.
    pub fn is_known(&self) -> bool {
        let lower = self.0.to_lowercase();
        KNOWN_AGENTS.contains(&lower.as_str())
    }
}

impl std::fmt::Display for AgentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for AgentId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for AgentId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// The three mood categories of an affect footprint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mood {
    Amethyst,
    Citrine,
    Obsidian,
}

impl Mood {
    pub const ALL: [Mood; 3] = [Mood::Amethyst, Mood::Citrine, Mood::Obsidian];

    pub fn as_str(&self) -> &'static str {
        match self {
            Mood::Amethyst => "amethyst",
            Mood::Citrine => "citrine",
            Mood::Obsidian => "obsidian",
        }
    }
}

impl std::fmt::Display for Mood {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Distribution over the three moods.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct AffectFootprint {
    pub amethyst: f64,
    pub citrine: f64,
    pub obsidian: f64,
}

impl AffectFootprint {
    /// Used when a text carries no mood signal at all.
    pub const NEUTRAL: AffectFootprint = AffectFootprint {
        amethyst: 0.33,
        citrine: 0.33,
        obsidian: 0.34,
    };

    pub fn total(&self) -> f64 {
        self.amethyst + self.citrine + self.obsidian
    }

    pub fn get(&self, mood: Mood) -> f64 {
        match mood {
            Mood::Amethyst => self.amethyst,
            Mood::Citrine => self.citrine,
            Mood::Obsidian => self.obsidian,
        }
    }

    /// Scale to unit sum. A zero vector stays zero.
    pub fn normalized(self) -> Self {
        let total = self.total();
        if total == 0.0 {
            return self;
        }
        Self {
            amethyst: self.amethyst / total,
            citrine: self.citrine / total,
            obsidian: self.obsidian / total,
        }
    }
}

impl std::ops::Add for AffectFootprint {
    type Output = AffectFootprint;

    fn add(self, rhs: AffectFootprint) -> AffectFootprint {
        AffectFootprint {
            amethyst: self.amethyst + rhs.amethyst,
            citrine: self.citrine + rhs.citrine,
            obsidian: self.obsidian + rhs.obsidian,
        }
    }
}

/// A tracked text invocation attributed to an agent.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Scroll {
    pub id: ScrollId,
    #[serde(rename = "type")]
    pub scroll_type: String,
    pub agent: AgentId,
    pub poetic_affect: bool,
    pub timestamp: DateTime<Utc>,
    pub echo_depth: f64,
    /// Informational only; never aggregated.
    pub resonant_drift: f64,
    pub affect_footprint: AffectFootprint,
    #[serde(default, skip_serializing_if = "serde_json::Map::is_empty")]
    pub metadata: serde_json::Map<String, serde_json::Value>,
}

/// Input to [`crate::ResonanceEngine::track_scroll_invocation`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScrollInvocation {
    #[serde(rename = "type")]
    pub scroll_type: String,
    pub agent: AgentId,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub metadata: serde_json::Map<String, serde_json::Value>,
}

impl ScrollInvocation {
    pub fn new(scroll_type: &str, agent: &str, content: &str) -> Self {
        Self {
            scroll_type: scroll_type.to_string(),
            agent: AgentId::from(agent),
            content: Some(content.to_string()),
            metadata: serde_json::Map::new(),
        }
    }

    pub fn with_metadata(mut self, metadata: serde_json::Map<String, serde_json::Value>) -> Self {
        self.metadata = metadata;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scroll_id_format() {
        let at = Utc::now();
        let id = ScrollId::generate(at);
        let prefix = format!("scroll_{}_", at.timestamp_millis());
        assert!(id.as_str().starts_with(&prefix));
        assert_eq!(id.as_str().len(), prefix.len() + 9);
    }

    #[test]
    fn test_scroll_ids_differ_at_same_instant() {
        let at = Utc::now();
        assert_ne!(ScrollId::generate(at), ScrollId::generate(at));
    }

    #[test]
    fn test_agent_roster() {
        assert!(AgentId::from("oracle").is_known());
        assert!(AgentId::from("Conjuror").is_known());
        assert!(!AgentId::from("stranger").is_known());
    }

    #[test]
    fn test_footprint_normalized() {
        let fp = AffectFootprint {
            amethyst: 2.0,
            citrine: 1.0,
            obsidian: 1.0,
        }
        .normalized();
        assert!((fp.amethyst - 0.5).abs() < 1e-12);
        assert!((fp.total() - 1.0).abs() < 1e-12);
        assert_eq!(AffectFootprint::default().normalized(), AffectFootprint::default());
    }

    #[test]
    fn test_scroll_serializes_type_field() {
        let scroll = Scroll {
            id: ScrollId::from("scroll_1_abcdefghi"),
            scroll_type: "ECHOBLOOM".into(),
            agent: AgentId::from("aria"),
            poetic_affect: true,
            timestamp: Utc::now(),
            echo_depth: 1.0,
            resonant_drift: 0.0,
            affect_footprint: AffectFootprint::NEUTRAL,
            metadata: serde_json::Map::new(),
        };
        let json = serde_json::to_value(&scroll).unwrap();
        assert_eq!(json["id"], "scroll_1_abcdefghi");
        assert_eq!(json["type"], "ECHOBLOOM");
        assert_eq!(json["agent"], "aria");
        assert!(json.get("metadata").is_none());
    }
}
