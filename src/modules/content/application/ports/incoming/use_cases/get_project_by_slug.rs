use async_trait::async_trait;

use crate::modules::content::application::views::project::ProjectDetailView;

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetProjectBySlugError {
    /// Unknown slug, or the store fell back; the fetch layer has already
    /// logged the difference.
    #[error("Project not found")]
    NotFound,
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait GetProjectBySlugUseCase: Send + Sync {
    async fn execute(&self, slug: &str) -> Result<ProjectDetailView, GetProjectBySlugError>;
}
