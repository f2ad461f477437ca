use std::sync::Arc;

use actix_web::web;

use crate::modules::content::application::fetch::ContentFetcher;
use crate::modules::content::application::service::{
    AboutPageService, BlogPageService, CheckDocumentService, ExperiencePageService,
    HomePageService, PostDetailService, ProjectDetailService, ProjectsPageService,
};
use crate::tests::support::stubs::StubContentStore;
use crate::AppState;

/// Builds an `AppState` with real services wired to a stub store, so route
/// tests exercise the whole pipeline down to JSON shape.
pub struct TestAppStateBuilder {
    store: StubContentStore,
}

impl Default for TestAppStateBuilder {
    /// Empty store: every query resolves to `null`.
    fn default() -> Self {
        Self {
            store: StubContentStore::new(),
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_store(store: StubContentStore) -> Self {
        Self { store }
    }

    pub fn build(self) -> web::Data<AppState> {
        let fetcher = ContentFetcher::new(Arc::new(self.store));
        web::Data::new(AppState {
            home_page: Arc::new(HomePageService::new(fetcher.clone())),
            about_page: Arc::new(AboutPageService::new(fetcher.clone())),
            projects_page: Arc::new(ProjectsPageService::new(fetcher.clone())),
            project_detail: Arc::new(ProjectDetailService::new(fetcher.clone())),
            experience_page: Arc::new(ExperiencePageService::new(fetcher.clone())),
            blog_page: Arc::new(BlogPageService::new(fetcher.clone())),
            post_detail: Arc::new(PostDetailService::new(fetcher)),
            check_document: Arc::new(CheckDocumentService),
        })
    }
}
