pub mod check_document;
pub mod get_about_page;
pub mod get_blog_page;
pub mod get_experience_page;
pub mod get_home_page;
pub mod get_post_by_slug;
pub mod get_project_by_slug;
pub mod get_projects_page;

pub use check_document::{CheckDocumentError, CheckDocumentUseCase, SchemaCheckReport};
pub use get_about_page::GetAboutPageUseCase;
pub use get_blog_page::GetBlogPageUseCase;
pub use get_experience_page::GetExperiencePageUseCase;
pub use get_home_page::GetHomePageUseCase;
pub use get_post_by_slug::{GetPostBySlugError, GetPostBySlugUseCase};
pub use get_project_by_slug::{GetProjectBySlugError, GetProjectBySlugUseCase};
pub use get_projects_page::GetProjectsPageUseCase;
