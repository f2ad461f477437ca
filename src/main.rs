pub mod modules;
pub use modules::content;
pub mod health;
pub mod shared;

use crate::content::adapter::outgoing::{SanityConfig, SanityStoreHttp};
use crate::content::application::fetch::ContentFetcher;
use crate::content::application::ports::incoming::use_cases::{
    CheckDocumentUseCase, GetAboutPageUseCase, GetBlogPageUseCase, GetExperiencePageUseCase,
    GetHomePageUseCase, GetPostBySlugUseCase, GetProjectBySlugUseCase, GetProjectsPageUseCase,
};
use crate::content::application::ports::outgoing::content_store::ContentStore;
use crate::content::application::service::{
    AboutPageService, BlogPageService, CheckDocumentService, ExperiencePageService,
    HomePageService, PostDetailService, ProjectDetailService, ProjectsPageService,
};
use crate::shared::api::custom_json_config;

use actix_web::{web, App, HttpServer};

use std::env;
use std::sync::Arc;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub home_page: Arc<dyn GetHomePageUseCase + Send + Sync>,
    pub about_page: Arc<dyn GetAboutPageUseCase + Send + Sync>,
    pub projects_page: Arc<dyn GetProjectsPageUseCase + Send + Sync>,
    pub project_detail: Arc<dyn GetProjectBySlugUseCase + Send + Sync>,
    pub experience_page: Arc<dyn GetExperiencePageUseCase + Send + Sync>,
    pub blog_page: Arc<dyn GetBlogPageUseCase + Send + Sync>,
    pub post_detail: Arc<dyn GetPostBySlugUseCase + Send + Sync>,
    pub check_document: Arc<dyn CheckDocumentUseCase + Send + Sync>,
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> std::io::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    // Environment variable loading
    let env_name = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());

    // Try .env.{environment} first, then fall back to .env
    let env_file = format!(".env.{}", env_name);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }

    let host = env::var("HOST").expect("HOST is not set in .env file");
    let port = env::var("PORT").expect("PORT is not set in .env file");
    let server_url = format!("{host}:{port}");

    // Content store connection
    let sanity_config = SanityConfig::from_env();
    info!(
        project_id = %sanity_config.project_id,
        dataset = %sanity_config.dataset,
        use_cdn = sanity_config.use_cdn,
        "Connecting to content store"
    );

    let store: Arc<dyn ContentStore> = Arc::new(SanityStoreHttp::new(&sanity_config));
    let fetcher = ContentFetcher::new(Arc::clone(&store));

    let state = AppState {
        home_page: Arc::new(HomePageService::new(fetcher.clone())),
        about_page: Arc::new(AboutPageService::new(fetcher.clone())),
        projects_page: Arc::new(ProjectsPageService::new(fetcher.clone())),
        project_detail: Arc::new(ProjectDetailService::new(fetcher.clone())),
        experience_page: Arc::new(ExperiencePageService::new(fetcher.clone())),
        blog_page: Arc::new(BlogPageService::new(fetcher.clone())),
        post_detail: Arc::new(PostDetailService::new(fetcher)),
        check_document: Arc::new(CheckDocumentService),
    };

    info!("Server run on: {}", server_url);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&store)))
            .app_data(custom_json_config())
            .configure(init_routes)
    })
    .bind(server_url)?
    .run()
    .await
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Pages
    cfg.service(crate::content::adapter::incoming::web::routes::get_home_page_handler);
    cfg.service(crate::content::adapter::incoming::web::routes::get_about_page_handler);
    cfg.service(crate::content::adapter::incoming::web::routes::get_projects_page_handler);
    cfg.service(crate::content::adapter::incoming::web::routes::get_experience_page_handler);
    cfg.service(crate::content::adapter::incoming::web::routes::get_blog_page_handler);
    // Details
    cfg.service(crate::content::adapter::incoming::web::routes::get_project_by_slug_handler);
    cfg.service(crate::content::adapter::incoming::web::routes::get_post_by_slug_handler);
    // Schema
    cfg.service(crate::content::adapter::incoming::web::routes::check_document_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e}");
    }
}
