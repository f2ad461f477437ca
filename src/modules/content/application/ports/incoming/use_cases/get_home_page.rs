use async_trait::async_trait;

use crate::modules::content::application::views::pages::HomePageView;

/// Infallible by design: every underlying fetch falls back to an empty
/// value, so the home page always renders.
#[async_trait]
pub trait GetHomePageUseCase: Send + Sync {
    async fn execute(&self) -> HomePageView;
}
