use actix_web::{get, web, Responder};

use crate::{shared::api::ApiResponse, AppState};

#[get("/api/pages/blog")]
pub async fn get_blog_page_handler(data: web::Data<AppState>) -> impl Responder {
    ApiResponse::success(data.blog_page.execute().await)
}
