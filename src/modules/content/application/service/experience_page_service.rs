// src/modules/content/application/service/experience_page_service.rs

use async_trait::async_trait;
use chrono::{NaiveDate, Utc};

use crate::modules::content::application::fetch::ContentFetcher;
use crate::modules::content::application::ports::incoming::use_cases::GetExperiencePageUseCase;
use crate::modules::content::application::queries;
use crate::modules::content::application::views::experience::{
    ExperienceItemView, EMPTY_EXPERIENCE,
};
use crate::modules::content::application::views::pages::ExperiencePageView;
use crate::modules::content::application::views::section::SectionView;
use crate::modules::content::domain::documents::Experience;

pub struct ExperiencePageService {
    fetcher: ContentFetcher,
}

impl ExperiencePageService {
    pub fn new(fetcher: ContentFetcher) -> Self {
        Self { fetcher }
    }

    async fn build(&self, today: NaiveDate) -> ExperiencePageView {
        let mut experiences = self
            .fetcher
            .fetch_list::<Experience>(queries::all_experience())
            .await
            .into_list();
        queries::order_experience(&mut experiences);

        ExperiencePageView {
            experiences: SectionView::new(
                experiences
                    .iter()
                    .map(|exp| ExperienceItemView::from_store(exp, today))
                    .collect(),
                EMPTY_EXPERIENCE,
            ),
        }
    }
}

#[async_trait]
impl GetExperiencePageUseCase for ExperiencePageService {
    async fn execute(&self) -> ExperiencePageView {
        self.build(Utc::now().date_naive()).await
    }
}
