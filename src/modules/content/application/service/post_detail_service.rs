// src/modules/content/application/service/post_detail_service.rs

use async_trait::async_trait;

use crate::modules::content::application::fetch::{ContentFetcher, Fetched};
use crate::modules::content::application::ports::incoming::use_cases::{
    GetPostBySlugError, GetPostBySlugUseCase,
};
use crate::modules::content::application::queries;
use crate::modules::content::application::views::post::PostDetailView;
use crate::modules::content::domain::documents::Post;

pub struct PostDetailService {
    fetcher: ContentFetcher,
}

impl PostDetailService {
    pub fn new(fetcher: ContentFetcher) -> Self {
        Self { fetcher }
    }
}

#[async_trait]
impl GetPostBySlugUseCase for PostDetailService {
    async fn execute(&self, slug: &str) -> Result<PostDetailView, GetPostBySlugError> {
        match self
            .fetcher
            .fetch_single::<Post>(queries::post_by_slug(slug))
            .await
        {
            Fetched::Hit(post) => Ok(PostDetailView::from_store(&post)),
            Fetched::Empty | Fetched::Failed => Err(GetPostBySlugError::NotFound),
        }
    }
}
