// src/modules/content/application/service/projects_page_service.rs

use async_trait::async_trait;

use crate::modules::content::application::fetch::ContentFetcher;
use crate::modules::content::application::ports::incoming::use_cases::GetProjectsPageUseCase;
use crate::modules::content::application::queries;
use crate::modules::content::application::views::pages::ProjectsPageView;
use crate::modules::content::application::views::project::{ProjectCardView, EMPTY_PROJECTS};
use crate::modules::content::application::views::section::SectionView;
use crate::modules::content::domain::documents::Project;

pub struct ProjectsPageService {
    fetcher: ContentFetcher,
}

impl ProjectsPageService {
    pub fn new(fetcher: ContentFetcher) -> Self {
        Self { fetcher }
    }
}

#[async_trait]
impl GetProjectsPageUseCase for ProjectsPageService {
    async fn execute(&self) -> ProjectsPageView {
        let mut projects = self
            .fetcher
            .fetch_list::<Project>(queries::all_projects())
            .await
            .into_list();
        queries::order_projects(&mut projects);

        ProjectsPageView {
            projects: SectionView::new(
                projects.iter().map(ProjectCardView::from_store).collect(),
                EMPTY_PROJECTS,
            ),
        }
    }
}
