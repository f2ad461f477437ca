// src/modules/content/application/ports/outgoing/content_store.rs

use async_trait::async_trait;
use serde_json::Value;

use crate::modules::content::application::queries::GroqQuery;

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum ContentStoreError {
    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Content store responded with status {0}")]
    Status(u16),

    #[error("Malformed response: {0}")]
    Decode(String),
}

//
// ──────────────────────────────────────────────────────────
// Port (read-only; a single attempt per request, no retry)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait ContentStore: Send + Sync {
    /// Runs one catalog query and returns the raw document tree. `Null`
    /// means the store matched nothing; lists come back as JSON arrays with
    /// reference fields already expanded.
    async fn execute(&self, query: &GroqQuery) -> Result<Value, ContentStoreError>;

    /// Cheap reachability check for the readiness probe.
    async fn ping(&self) -> Result<(), ContentStoreError>;
}
