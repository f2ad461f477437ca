use actix_web::{get, web, Responder};

use crate::{shared::api::ApiResponse, AppState};

#[get("/api/pages/experience")]
pub async fn get_experience_page_handler(data: web::Data<AppState>) -> impl Responder {
    ApiResponse::success(data.experience_page.execute().await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use serde_json::{json, Value};

    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::stubs::StubContentStore;

    #[actix_web::test]
    async fn test_get_experience_page_empty_store_carries_message() {
        let app_state = TestAppStateBuilder::default().build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .service(get_experience_page_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/pages/experience")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], true);
        assert!(body["data"]["experiences"]["items"]
            .as_array()
            .unwrap()
            .is_empty());
        assert!(body["data"]["experiences"]["empty_message"]
            .as_str()
            .unwrap()
            .starts_with("No experience entries found"));
    }

    #[actix_web::test]
    async fn test_get_experience_page_formats_ranges_and_flags_conflicts() {
        let store = StubContentStore::new().with_result(
            "all-experience",
            json!([{
                "_id": "e1",
                "company": "Acme",
                "position": "Engineer",
                "startDate": "2020-01-15",
                "endDate": "2021-03-10",
                "current": true,
                "description": [{"_type": "block"}]
            }]),
        );

        let app_state = TestAppStateBuilder::with_store(store).build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .service(get_experience_page_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/pages/experience")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        let item = &body["data"]["experiences"]["items"][0];
        assert_eq!(item["date_range"], "January 2020 - March 2021");
        assert_eq!(item["duration"], "1 yr 2 mos");
        // Contradictory document: stored values pass through, warning set.
        assert_eq!(item["current"], true);
        assert!(item["data_warning"].as_str().unwrap().contains("Acme"));
    }
}
