use async_trait::async_trait;

use crate::modules::content::application::views::pages::AboutPageView;

/// A missing personal-info singleton is a normal renderable state, so the
/// about page never fails either.
#[async_trait]
pub trait GetAboutPageUseCase: Send + Sync {
    async fn execute(&self) -> AboutPageView;
}
