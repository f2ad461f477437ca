use actix_web::{get, web, Responder};

use crate::{shared::api::ApiResponse, AppState};

#[get("/api/pages/projects")]
pub async fn get_projects_page_handler(data: web::Data<AppState>) -> impl Responder {
    ApiResponse::success(data.projects_page.execute().await)
}
