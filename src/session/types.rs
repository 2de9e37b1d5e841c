//! Wire types for the honeypot endpoint.

use serde::{Deserialize, Serialize};

use crate::detection::Intelligence;

/// One inbound message from a suspected scammer.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MessageEvent {
    /// Omitted on the first message of a conversation.
    #[serde(default)]
    pub conversation_id: Option<String>,
    pub message: String,
    /// Who sent it, typically `"scammer"`. Informational only.
    pub sender: String,
}

/// What the endpoint sends back for each message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HoneypotResponse {
    /// Computed over the whole conversation so far.
    pub scam_detected: bool,
    pub conversation_id: String,
    /// Empty unless `scam_detected`.
    pub agent_reply: String,
    /// From the latest message only.
    pub extracted_intelligence: Intelligence,
    /// Messages in the conversation, including this one.
    pub engagement_turns: usize,
}
