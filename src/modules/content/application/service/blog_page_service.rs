// src/modules/content/application/service/blog_page_service.rs

use async_trait::async_trait;

use crate::modules::content::application::fetch::ContentFetcher;
use crate::modules::content::application::ports::incoming::use_cases::GetBlogPageUseCase;
use crate::modules::content::application::queries;
use crate::modules::content::application::views::pages::BlogPageView;
use crate::modules::content::application::views::post::{PostCardView, EMPTY_POSTS};
use crate::modules::content::application::views::section::SectionView;
use crate::modules::content::domain::documents::Post;

pub struct BlogPageService {
    fetcher: ContentFetcher,
}

impl BlogPageService {
    pub fn new(fetcher: ContentFetcher) -> Self {
        Self { fetcher }
    }
}

#[async_trait]
impl GetBlogPageUseCase for BlogPageService {
    async fn execute(&self) -> BlogPageView {
        let mut posts = self
            .fetcher
            .fetch_list::<Post>(queries::all_posts())
            .await
            .into_list();
        queries::order_posts(&mut posts);

        BlogPageView {
            posts: SectionView::new(
                posts.iter().map(PostCardView::from_store).collect(),
                EMPTY_POSTS,
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::Arc;

    use serde_json::json;

    use crate::tests::support::stubs::StubContentStore;

    fn service(store: StubContentStore) -> BlogPageService {
        BlogPageService::new(ContentFetcher::new(Arc::new(store)))
    }

    #[tokio::test]
    async fn posts_are_ordered_by_publish_date_desc() {
        let post = |id: &str, ts: &str| {
            json!({
                "_id": id,
                "title": id,
                "slug": {"current": id},
                "publishedAt": ts,
                "body": []
            })
        };
        let store = StubContentStore::new().with_result(
            "all-posts",
            json!([
                post("old", "2023-01-01T00:00:00Z"),
                post("new", "2024-06-01T00:00:00Z")
            ]),
        );

        let view = service(store).execute().await;
        let slugs: Vec<&str> = view.posts.items.iter().map(|p| p.slug.as_str()).collect();
        assert_eq!(slugs, vec!["new", "old"]);
        assert_eq!(view.posts.items[0].published_on, "June 1, 2024");
    }

    #[tokio::test]
    async fn store_failure_renders_the_empty_state_not_an_error() {
        let view = service(StubContentStore::failing()).execute().await;
        assert!(view.posts.items.is_empty());
        assert_eq!(view.posts.empty_message, Some(EMPTY_POSTS));
    }
}
