use async_trait::async_trait;

use crate::modules::content::application::views::pages::ProjectsPageView;

#[async_trait]
pub trait GetProjectsPageUseCase: Send + Sync {
    async fn execute(&self) -> ProjectsPageView;
}
