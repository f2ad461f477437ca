use actix_web::{get, web, Responder};

use crate::{
    modules::content::application::ports::incoming::use_cases::GetProjectBySlugError,
    shared::api::ApiResponse, AppState,
};

#[get("/api/projects/{slug}")]
pub async fn get_project_by_slug_handler(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let slug = path.into_inner();

    match data.project_detail.execute(&slug).await {
        Ok(project) => ApiResponse::success(project),
        Err(GetProjectBySlugError::NotFound) => {
            ApiResponse::not_found("PROJECT_NOT_FOUND", "Project not found")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use serde_json::{json, Value};

    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::stubs::StubContentStore;

    #[actix_web::test]
    async fn test_get_project_by_slug_success() {
        let store = StubContentStore::new().with_result(
            "project-by-slug",
            json!({
                "_id": "p1",
                "title": "Pipeline",
                "slug": {"current": "pipeline"},
                "description": "d",
                "projectType": "api",
                "startDate": "2023-02-01",
                "teamSize": 4,
                "myRole": "lead",
                "technologies": [{
                    "_id": "t1",
                    "name": "Rust",
                    "slug": {"current": "rust"},
                    "category": "backend",
                    "proficiencyLevel": 5
                }]
            }),
        );

        let app_state = TestAppStateBuilder::with_store(store).build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .service(get_project_by_slug_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/projects/pipeline")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["slug"], "pipeline");
        assert_eq!(body["data"]["timeline"], "February 2023 - Present");
        assert_eq!(body["data"]["team_size"], 4);
        assert_eq!(body["data"]["role"], "Lead Developer");
    }

    #[actix_web::test]
    async fn test_get_project_by_slug_not_found() {
        let app_state = TestAppStateBuilder::default().build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .service(get_project_by_slug_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/projects/missing")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], false);
        assert!(body["data"].is_null());
        assert_eq!(body["error"]["code"], "PROJECT_NOT_FOUND");
    }

    #[actix_web::test]
    async fn test_get_project_by_slug_store_failure_reads_as_not_found() {
        let app_state = TestAppStateBuilder::with_store(StubContentStore::failing()).build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .service(get_project_by_slug_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/projects/pipeline")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "PROJECT_NOT_FOUND");
    }
}
