use actix_web::{get, web, Responder};

use crate::{shared::api::ApiResponse, AppState};

#[get("/api/pages/about")]
pub async fn get_about_page_handler(data: web::Data<AppState>) -> impl Responder {
    ApiResponse::success(data.about_page.execute().await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use serde_json::{json, Value};

    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::stubs::StubContentStore;

    #[actix_web::test]
    async fn test_get_about_page_empty_store_uses_fallback_paragraphs() {
        let app_state = TestAppStateBuilder::default().build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .service(get_about_page_handler),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/pages/about").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["about"]["title"], "Full Stack Developer");
        assert_eq!(
            body["data"]["about"]["about_fallback"]
                .as_array()
                .unwrap()
                .len(),
            3
        );
        assert_eq!(body["data"]["about"]["has_resume"], false);
    }

    #[actix_web::test]
    async fn test_get_about_page_stored_document_wins() {
        let store = StubContentStore::new().with_result(
            "personal-info",
            json!({
                "_id": "personal",
                "name": "Jane Doe",
                "title": "Platform Engineer",
                "bio": "I build things.",
                "availability": "freelance",
                "email": "jane@example.com",
                "languages": [{"language": "English", "proficiency": "native"}]
            }),
        );

        let app_state = TestAppStateBuilder::with_store(store).build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .service(get_about_page_handler),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/pages/about").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["about"]["name"], "Jane Doe");
        assert_eq!(body["data"]["about"]["availability"], "Freelance only");
        assert_eq!(body["data"]["about"]["email"], "jane@example.com");
        assert_eq!(
            body["data"]["about"]["languages"][0]["proficiency"],
            "Native"
        );
    }
}
