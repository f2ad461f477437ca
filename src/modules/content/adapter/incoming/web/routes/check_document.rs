use actix_web::{post, web, Responder};
use serde::Deserialize;
use serde_json::Value;

use crate::{
    modules::content::application::ports::incoming::use_cases::CheckDocumentError,
    shared::api::ApiResponse, AppState,
};

#[derive(Deserialize)]
pub struct CheckDocumentRequest {
    pub document_type: String,
    pub document: Value,
}

/// Lints a draft document against the content model before it is pushed to
/// the studio. Always 200 for a known type; `valid` and `violations` carry
/// the verdict.
#[post("/api/schema/check")]
pub async fn check_document_handler(
    payload: web::Json<CheckDocumentRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let CheckDocumentRequest {
        document_type,
        document,
    } = payload.into_inner();

    match data.check_document.execute(&document_type, document).await {
        Ok(report) => ApiResponse::success(report),
        Err(CheckDocumentError::UnknownDocumentType(doc_type)) => ApiResponse::bad_request(
            "UNKNOWN_DOCUMENT_TYPE",
            &format!("Unknown document type: {doc_type}"),
        ),
    }
}
