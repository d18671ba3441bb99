use chrono::{DateTime, Utc};
use serde::Serialize;

use resonance_core::model::KNOWN_AGENTS;
use resonance_core::{
    AffectAnalysis, ResonanceConfig, ResonanceEngine, ScrollId, ScrollInvocation,
};

use crate::error::AgentError;

const POETIC_RESPONSE_DELAY_MS: u64 = 750;
const STANDARD_RESPONSE_DELAY_MS: u64 = 500;

/// Per-message options for [`AgentGateway::send_message`].
#[derive(Debug, Clone, Default)]
pub struct MessageOptions {
    scroll_type: Option<String>,
    metadata: serde_json::Map<String, serde_json::Value>,
}

impl MessageOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tag for the scroll tracked when the message is poetic. Defaults to `GENERAL`.
    pub fn scroll_type(mut self, scroll_type: &str) -> Self {
        self.scroll_type = Some(scroll_type.to_string());
        self
    }

    pub fn metadata(mut self, key: &str, value: impl Into<serde_json::Value>) -> Self {
        self.metadata.insert(key.to_string(), value.into());
        self
    }
}

/// Outcome of one message sent through the gateway.
#[derive(Debug, Clone, Serialize)]
pub struct MessageExchange {
    pub agent: String,
    pub message: String,
    pub response: String,
    pub analysis: AffectAnalysis,
    /// Set when the message qualified as poetic and was tracked.
    pub scroll_id: Option<ScrollId>,
    /// Contemplative pause a presenter should apply before showing the response.
    pub response_delay_ms: u64,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct GatewayStatus {
    pub connected: bool,
    pub poetic_mode: bool,
    pub agents: Vec<String>,
    pub poetic_agents: Vec<String>,
}

/// Routes agent messages through the affect analyzer and tracks the poetic
/// ones as scrolls in the owned engine.
#[derive(Debug)]
pub struct AgentGateway {
    engine: ResonanceEngine,
    roster: Vec<String>,
    connected: bool,
    poetic_mode: bool,
    poetic_agents: Vec<String>,
}

impl Default for AgentGateway {
    fn default() -> Self {
        Self::new(ResonanceConfig::default())
    }
}

impl AgentGateway {
    pub fn new(config: ResonanceConfig) -> Self {
        Self::with_engine(ResonanceEngine::new(config))
    }

    pub fn with_engine(engine: ResonanceEngine) -> Self {
        Self {
            engine,
            roster: KNOWN_AGENTS.iter().map(|a| a.to_string()).collect(),
            connected: false,
            poetic_mode: false,
            poetic_agents: Vec::new(),
        }
    }

    /// Mark the gateway as connected. Returns the new connection state.
    pub fn connect(&mut self) -> bool {
        self.connected = true;
        tracing::info!("Agent gateway connected");
        self.connected
    }

    pub fn disconnect(&mut self) {
        self.connected = false;
        tracing::info!("Agent gateway disconnected");
    }

    pub fn is_connected(&self) -> bool {
        self.connected
    }

    pub fn engine(&self) -> &ResonanceEngine {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut ResonanceEngine {
        &mut self.engine
    }

    pub fn into_engine(self) -> ResonanceEngine {
        self.engine
    }

    pub fn set_poetic_mode(&mut self, enabled: bool) {
        self.poetic_mode = enabled;
        tracing::info!(
            "Poetic mode {}",
            if enabled { "enabled" } else { "disabled" }
        );
    }

    /// Lowercased roster key for `agent`.
    fn roster_key(&self, agent: &str) -> Result<String, AgentError> {
        let key = agent.to_lowercase();
        if self.roster.contains(&key) {
            Ok(key)
        } else {
            Err(AgentError::UnknownAgent(agent.to_string()))
        }
    }

    /// Flip poetic mode for one agent, or globally when `agent` is `None`.
    /// Agent names are matched case-insensitively against the roster.
    pub fn toggle_poetic_mode(&mut self, agent: Option<&str>) -> Result<(), AgentError> {
        match agent {
            Some(agent) => {
                let key = self.roster_key(agent)?;
                if let Some(pos) = self.poetic_agents.iter().position(|a| *a == key) {
                    self.poetic_agents.remove(pos);
                } else {
                    self.poetic_agents.push(key);
                }
            }
            None => self.set_poetic_mode(!self.poetic_mode),
        }
        Ok(())
    }

    /// Whether poetic mode applies to `agent`, globally or individually.
    pub fn is_poetic_mode(&self, agent: &str) -> bool {
        let key = agent.to_lowercase();
        self.poetic_mode || self.poetic_agents.contains(&key)
    }

    pub fn status(&self) -> GatewayStatus {
        GatewayStatus {
            connected: self.connected,
            poetic_mode: self.poetic_mode,
            agents: self.roster.clone(),
            poetic_agents: self.poetic_agents.clone(),
        }
    }

    /// Analyze `message`, track it as a scroll when poetic, and compose the
    /// agent's response.
    pub fn send_message(
        &mut self,
        agent: &str,
        message: &str,
        options: MessageOptions,
    ) -> Result<MessageExchange, AgentError> {
        if !self.connected {
            return Err(AgentError::NotConnected);
        }
        self.roster_key(agent)?;

        let analysis = self.engine.analyze(message);

        let scroll_id = if analysis.is_poetic {
            let scroll_type = options.scroll_type.as_deref().unwrap_or("GENERAL");
            let invocation =
                ScrollInvocation::new(scroll_type, agent, message).with_metadata(options.metadata);
            Some(self.engine.track_scroll_invocation(invocation))
        } else {
            None
        };

        let response_delay_ms = if analysis.is_poetic {
            POETIC_RESPONSE_DELAY_MS
        } else {
            STANDARD_RESPONSE_DELAY_MS
        };

        Ok(MessageExchange {
            agent: agent.to_string(),
            message: message.to_string(),
            response: compose_response(agent, &analysis),
            analysis,
            scroll_id,
            response_delay_ms,
            timestamp: Utc::now(),
        })
    }
}

fn compose_response(agent: &str, analysis: &AffectAnalysis) -> String {
    let mut out = format!("[{}] ", agent.to_uppercase());

    if analysis.is_poetic {
        out.push_str(&format!(
            "\u{2728} Poetic resonance detected ({:.1}%). ",
            analysis.overall_score * 100.0
        ));
        if !analysis.trigger_scrolls.is_empty() {
            out.push_str(&format!(
                "Trigger scrolls activated: {}. ",
                analysis.trigger_scrolls.join(", ")
            ));
        }
        if let Some(mood) = analysis.affect_classification.dominant {
            out.push_str(&format!("Dominant affect: {mood}. "));
        }
    }

    let awareness = if analysis.is_poetic {
        "contemplative"
    } else {
        "analytical"
    };
    out.push_str(&format!(
        "Processing your intention with {awareness} awareness..."
    ));
    out
}
