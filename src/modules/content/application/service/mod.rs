pub mod about_page_service;
pub mod blog_page_service;
pub mod check_document_service;
pub mod experience_page_service;
pub mod home_page_service;
pub mod post_detail_service;
pub mod project_detail_service;
pub mod projects_page_service;

pub use about_page_service::AboutPageService;
pub use blog_page_service::BlogPageService;
pub use check_document_service::CheckDocumentService;
pub use experience_page_service::ExperiencePageService;
pub use home_page_service::HomePageService;
pub use post_detail_service::PostDetailService;
pub use project_detail_service::ProjectDetailService;
pub use projects_page_service::ProjectsPageService;
