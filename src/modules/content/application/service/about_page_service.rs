// src/modules/content/application/service/about_page_service.rs

use async_trait::async_trait;

use crate::modules::content::application::fetch::ContentFetcher;
use crate::modules::content::application::ports::incoming::use_cases::GetAboutPageUseCase;
use crate::modules::content::application::queries;
use crate::modules::content::application::views::pages::AboutPageView;
use crate::modules::content::application::views::personal::AboutView;
use crate::modules::content::domain::documents::PersonalInfo;

pub struct AboutPageService {
    fetcher: ContentFetcher,
}

impl AboutPageService {
    pub fn new(fetcher: ContentFetcher) -> Self {
        Self { fetcher }
    }
}

#[async_trait]
impl GetAboutPageUseCase for AboutPageService {
    async fn execute(&self) -> AboutPageView {
        let personal = self
            .fetcher
            .fetch_single::<PersonalInfo>(queries::personal_info())
            .await
            .into_option();

        AboutPageView {
            about: AboutView::from_store(personal.as_ref()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::Arc;

    use serde_json::json;

    use crate::tests::support::stubs::StubContentStore;

    fn service(store: StubContentStore) -> AboutPageService {
        AboutPageService::new(ContentFetcher::new(Arc::new(store)))
    }

    #[tokio::test]
    async fn missing_singleton_is_a_renderable_empty_state() {
        let view = service(StubContentStore::new()).execute().await;

        assert_eq!(view.about.title, "Full Stack Developer");
        assert_eq!(view.about.years_of_experience, 5);
        assert!(view.about.about_fallback.is_some());
    }

    #[tokio::test]
    async fn stored_singleton_drives_the_page() {
        let store = StubContentStore::new().with_result(
            "personal-info",
            json!({
                "_id": "personal",
                "name": "Jane Doe",
                "title": "Platform Engineer",
                "bio": "I build things.",
                "availability": "available",
                "email": "jane@example.com"
            }),
        );

        let view = service(store).execute().await;
        assert_eq!(view.about.name, "Jane Doe");
        assert_eq!(view.about.email.as_deref(), Some("jane@example.com"));
        assert_eq!(view.about.availability, "Available for work");
    }
}
