use async_trait::async_trait;

use crate::modules::content::application::views::pages::ExperiencePageView;

#[async_trait]
pub trait GetExperiencePageUseCase: Send + Sync {
    async fn execute(&self) -> ExperiencePageView;
}
