//! `ConversationStore` trait — single async interface for conversation history.
//!
//! Handlers never touch a global map: a store is built at startup and handed
//! to the orchestrator, so tests get isolated stores and another backend can
//! be dropped in without touching callers.

use async_trait::async_trait;
use uuid::Uuid;

use crate::error::StoreError;

/// Backend-agnostic conversation history storage.
///
/// History is append-only: no method removes or reorders messages.
#[async_trait]
pub trait ConversationStore: Send + Sync {
    /// Use the caller's id verbatim, or mint a fresh one.
    ///
    /// Caller-supplied ids are trusted; there is no existence check. An empty
    /// string counts as absent.
    async fn resolve_or_create(&self, id: Option<&str>) -> Result<String, StoreError> {
        Ok(match id {
            Some(id) if !id.is_empty() => id.to_string(),
            _ => Uuid::new_v4().to_string(),
        })
    }

    /// Append a message, creating the conversation if needed.
    ///
    /// Returns the history as it stands right after this append. The append
    /// and the snapshot are atomic, so concurrent appends to the same id never
    /// leak into each other's snapshot out of order.
    async fn append(&self, id: &str, message: &str) -> Result<Vec<String>, StoreError>;

    /// Full history in arrival order. Empty for an unknown id.
    async fn history(&self, id: &str) -> Result<Vec<String>, StoreError>;

    /// Number of conversations held.
    async fn conversation_count(&self) -> Result<usize, StoreError>;
}
