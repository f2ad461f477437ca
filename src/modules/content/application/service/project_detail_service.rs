// src/modules/content/application/service/project_detail_service.rs

use async_trait::async_trait;

use crate::modules::content::application::fetch::{ContentFetcher, Fetched};
use crate::modules::content::application::ports::incoming::use_cases::{
    GetProjectBySlugError, GetProjectBySlugUseCase,
};
use crate::modules::content::application::queries;
use crate::modules::content::application::views::project::ProjectDetailView;
use crate::modules::content::domain::documents::Project;

pub struct ProjectDetailService {
    fetcher: ContentFetcher,
}

impl ProjectDetailService {
    pub fn new(fetcher: ContentFetcher) -> Self {
        Self { fetcher }
    }
}

#[async_trait]
impl GetProjectBySlugUseCase for ProjectDetailService {
    async fn execute(&self, slug: &str) -> Result<ProjectDetailView, GetProjectBySlugError> {
        match self
            .fetcher
            .fetch_single::<Project>(queries::project_by_slug(slug))
            .await
        {
            Fetched::Hit(project) => Ok(ProjectDetailView::from_store(&project)),
            // Store failures have been absorbed and logged already; the page
            // sees the same not-found as an unknown slug.
            Fetched::Empty | Fetched::Failed => Err(GetProjectBySlugError::NotFound),
        }
    }
}
