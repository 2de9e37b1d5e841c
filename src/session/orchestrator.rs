//! Session orchestrator — one inbound message in, one honeypot response out.
//!
//! Steps per message:
//! 1. Resolve (or mint) the conversation id.
//! 2. Append the message; keep the post-append snapshot.
//! 3. Score the joined snapshot for scam intent.
//! 4. Extract intelligence from this message alone.
//! 5. If flagged, pick a stalling reply from the snapshot.

use std::sync::Arc;

use tracing::{debug, info};

use super::types::{HoneypotResponse, MessageEvent};
use crate::agent::select_rule;
use crate::detection::{extract_intelligence, score_history};
use crate::error::Result;
use crate::store::ConversationStore;

/// Drives a message through store, detection and persona.
#[derive(Clone)]
pub struct SessionOrchestrator {
    store: Arc<dyn ConversationStore>,
}

impl SessionOrchestrator {
    pub fn new(store: Arc<dyn ConversationStore>) -> Self {
        Self { store }
    }

    /// The backing store.
    pub fn store(&self) -> &Arc<dyn ConversationStore> {
        &self.store
    }

    /// Process one message. Assumes `event` already passed schema validation.
    pub async fn handle(&self, event: MessageEvent) -> Result<HoneypotResponse> {
        let conversation_id = self
            .store
            .resolve_or_create(event.conversation_id.as_deref())
            .await?;

        // Everything below reads this snapshot, never the store again.
        let history = self.store.append(&conversation_id, &event.message).await?;

        let score = score_history(&history);
        let scam_detected = score.is_scam();
        let extracted_intelligence = extract_intelligence(&event.message);

        let agent_reply = if scam_detected {
            let rule = select_rule(&history);
            debug!(conversation_id = %conversation_id, rule = %rule, "Reply rule selected");
            rule.reply().to_string()
        } else {
            String::new()
        };

        info!(
            conversation_id = %conversation_id,
            sender = %event.sender,
            turns = history.len(),
            scam_detected,
            keywords = ?score.matched_keywords,
            url_present = score.url_present,
            bank_accounts = extracted_intelligence.bank_accounts.len(),
            upi_ids = extracted_intelligence.upi_ids.len(),
            phishing_urls = extracted_intelligence.phishing_urls.len(),
            "Message processed"
        );

        Ok(HoneypotResponse {
            scam_detected,
            conversation_id,
            agent_reply,
            extracted_intelligence,
            engagement_turns: history.len(),
        })
    }
}
