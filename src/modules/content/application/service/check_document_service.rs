// src/modules/content/application/service/check_document_service.rs

use async_trait::async_trait;
use serde_json::Value;

use crate::modules::content::application::ports::incoming::use_cases::{
    CheckDocumentError, CheckDocumentUseCase, SchemaCheckReport,
};
use crate::modules::content::domain::schema;

pub struct CheckDocumentService;

#[async_trait]
impl CheckDocumentUseCase for CheckDocumentService {
    async fn execute(
        &self,
        document_type: &str,
        document: Value,
    ) -> Result<SchemaCheckReport, CheckDocumentError> {
        let doc_type: schema::DocumentType = document_type
            .parse()
            .map_err(|_| CheckDocumentError::UnknownDocumentType(document_type.to_string()))?;

        let violations = schema::check_document(doc_type, &document);
        Ok(SchemaCheckReport {
            document_type: doc_type.as_str().to_string(),
            valid: violations.is_empty(),
            violations,
        })
    }
}
