use async_trait::async_trait;

use crate::modules::content::application::views::pages::BlogPageView;

#[async_trait]
pub trait GetBlogPageUseCase: Send + Sync {
    async fn execute(&self) -> BlogPageView;
}
