// src/modules/content/application/views/pages.rs
//
// Top-level view models, one per page route.

use serde::Serialize;

use crate::modules::content::application::views::experience::ExperienceItemView;
use crate::modules::content::application::views::personal::{AboutView, ProfileView};
use crate::modules::content::application::views::post::PostCardView;
use crate::modules::content::application::views::project::ProjectCardView;
use crate::modules::content::application::views::section::SectionView;
use crate::modules::content::application::views::technology::TechnologyStackView;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HomePageView {
    pub profile: ProfileView,
    pub featured_projects: SectionView<ProjectCardView>,
    pub technologies: TechnologyStackView,
    pub recent_posts: SectionView<PostCardView>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AboutPageView {
    pub about: AboutView,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectsPageView {
    pub projects: SectionView<ProjectCardView>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExperiencePageView {
    pub experiences: SectionView<ExperienceItemView>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BlogPageView {
    pub posts: SectionView<PostCardView>,
}
