//! In-memory conversation store. Lives for the process lifetime.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use super::traits::ConversationStore;
use crate::error::StoreError;

/// Conversation histories keyed by id, behind a single lock.
///
/// Nothing is ever evicted.
// TODO: idle-conversation expiry (needs a last-seen timestamp per entry).
#[derive(Default)]
pub struct InMemoryStore {
    conversations: RwLock<HashMap<String, Vec<String>>>,
}

impl InMemoryStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }
}

#[async_trait]
impl ConversationStore for InMemoryStore {
    async fn append(&self, id: &str, message: &str) -> Result<Vec<String>, StoreError> {
        let mut conversations = self.conversations.write().await;
        let history = conversations.entry(id.to_string()).or_default();
        history.push(message.to_string());

        debug!(conversation_id = %id, turns = history.len(), "Message appended");

        Ok(history.clone())
    }

    async fn history(&self, id: &str) -> Result<Vec<String>, StoreError> {
        let conversations = self.conversations.read().await;
        Ok(conversations.get(id).cloned().unwrap_or_default())
    }

    async fn conversation_count(&self) -> Result<usize, StoreError> {
        Ok(self.conversations.read().await.len())
    }
}
