use actix_web::{get, web, Responder};

use crate::{
    modules::content::application::ports::incoming::use_cases::GetPostBySlugError,
    shared::api::ApiResponse, AppState,
};

#[get("/api/posts/{slug}")]
pub async fn get_post_by_slug_handler(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let slug = path.into_inner();

    match data.post_detail.execute(&slug).await {
        Ok(post) => ApiResponse::success(post),
        Err(GetPostBySlugError::NotFound) => {
            ApiResponse::not_found("POST_NOT_FOUND", "Blog post not found")
        }
    }
}
