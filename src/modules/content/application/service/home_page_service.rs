// src/modules/content/application/service/home_page_service.rs

use async_trait::async_trait;

use crate::modules::content::application::fetch::ContentFetcher;
use crate::modules::content::application::ports::incoming::use_cases::GetHomePageUseCase;
use crate::modules::content::application::queries;
use crate::modules::content::application::views::pages::HomePageView;
use crate::modules::content::application::views::personal::ProfileView;
use crate::modules::content::application::views::post::{PostCardView, EMPTY_RECENT_POSTS};
use crate::modules::content::application::views::project::{
    ProjectCardView, EMPTY_FEATURED_PROJECTS,
};
use crate::modules::content::application::views::section::SectionView;
use crate::modules::content::application::views::technology::TechnologyStackView;
use crate::modules::content::domain::documents::{PersonalInfo, Post, Project, Technology};

pub struct HomePageService {
    fetcher: ContentFetcher,
}

impl HomePageService {
    pub fn new(fetcher: ContentFetcher) -> Self {
        Self { fetcher }
    }
}

#[async_trait]
impl GetHomePageUseCase for HomePageService {
    async fn execute(&self) -> HomePageView {
        // Fixed four-way fan-out; each query resolves to its own value or
        // fallback, one failure never cancels the siblings.
        let (personal, featured, technologies, posts) = futures::join!(
            self.fetcher
                .fetch_single::<PersonalInfo>(queries::personal_info()),
            self.fetcher
                .fetch_list::<Project>(queries::featured_projects()),
            self.fetcher
                .fetch_list::<Technology>(queries::all_technologies()),
            self.fetcher.fetch_list::<Post>(queries::recent_posts()),
        );

        let personal = personal.into_option();
        let featured = queries::filter_featured(featured.into_list());

        let mut technologies = technologies.into_list();
        queries::order_technologies(&mut technologies);

        let mut posts = posts.into_list();
        queries::order_posts(&mut posts);
        posts.truncate(queries::RECENT_POSTS_LIMIT);

        HomePageView {
            profile: ProfileView::from_store(personal.as_ref()),
            featured_projects: SectionView::new(
                featured.iter().map(ProjectCardView::from_store).collect(),
                EMPTY_FEATURED_PROJECTS,
            ),
            technologies: TechnologyStackView::from_store(&technologies),
            recent_posts: SectionView::new(
                posts.iter().map(PostCardView::from_store).collect(),
                EMPTY_RECENT_POSTS,
            ),
        }
    }
}
