pub mod settings;

pub use settings::{ResonanceConfig, VerdictMode};
