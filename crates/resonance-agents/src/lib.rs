//! Agent messaging gateway over the resonance engine.
//!
//! # Example
//! ```
//! use resonance_agents::{AgentGateway, MessageOptions};
//!
//! let mut gateway = AgentGateway::default();
//! gateway.connect();
//! let exchange = gateway
//!     .send_message("oracle", "What does the aurora remember?", MessageOptions::default())
//!     .unwrap();
//! println!("{}", exchange.response);
//! ```

mod error;
mod gateway;

pub use error::AgentError;
pub use gateway::{AgentGateway, GatewayStatus, MessageExchange, MessageOptions};

// Re-export core types gateway users need
pub use resonance_core::{
    AffectAnalysis, OfferingRequest, ResonanceConfig, ResonanceEngine, ResonanceSnapshot, ScrollId,
};
