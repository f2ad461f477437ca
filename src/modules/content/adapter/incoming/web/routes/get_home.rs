use actix_web::{get, web, Responder};

use crate::{shared::api::ApiResponse, AppState};

#[get("/api/pages/home")]
pub async fn get_home_page_handler(data: web::Data<AppState>) -> impl Responder {
    ApiResponse::success(data.home_page.execute().await)
}
