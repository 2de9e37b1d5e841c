//! Per-message session handling: wire types and the orchestrator.

pub mod orchestrator;
pub mod types;

pub use orchestrator::SessionOrchestrator;
pub use types::{HoneypotResponse, MessageEvent};
