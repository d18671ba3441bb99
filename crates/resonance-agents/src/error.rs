use thiserror::Error;

#[derive(Error, Debug)]
pub enum AgentError {
    #[error("Agent gateway not connected")]
    NotConnected,

    #[error("Unknown agent: {0}")]
    UnknownAgent(String),
}
