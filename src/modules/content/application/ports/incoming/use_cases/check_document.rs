use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;

use crate::modules::content::domain::schema::Violation;

//
// ──────────────────────────────────────────────────────────
// Result + Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Serialize)]
pub struct SchemaCheckReport {
    pub document_type: String,
    pub valid: bool,
    pub violations: Vec<Violation>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum CheckDocumentError {
    #[error("Unknown document type: {0}")]
    UnknownDocumentType(String),
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

/// Editor-side lint of a draft document against the content model. The read
/// pipeline never calls this; it backs the schema-check route only.
#[async_trait]
pub trait CheckDocumentUseCase: Send + Sync {
    async fn execute(
        &self,
        document_type: &str,
        document: Value,
    ) -> Result<SchemaCheckReport, CheckDocumentError>;
}
