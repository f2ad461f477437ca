use async_trait::async_trait;

use crate::modules::content::application::views::post::PostDetailView;

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetPostBySlugError {
    #[error("Post not found")]
    NotFound,
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait GetPostBySlugUseCase: Send + Sync {
    async fn execute(&self, slug: &str) -> Result<PostDetailView, GetPostBySlugError>;
}
