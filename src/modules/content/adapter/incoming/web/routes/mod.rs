pub mod check_document;
pub mod get_about;
pub mod get_blog;
pub mod get_experience;
pub mod get_home;
pub mod get_post_by_slug;
pub mod get_project_by_slug;
pub mod get_projects;

pub use check_document::check_document_handler;
pub use get_about::get_about_page_handler;
pub use get_blog::get_blog_page_handler;
pub use get_experience::get_experience_page_handler;
pub use get_home::get_home_page_handler;
pub use get_post_by_slug::get_post_by_slug_handler;
pub use get_project_by_slug::get_project_by_slug_handler;
pub use get_projects::get_projects_page_handler;
