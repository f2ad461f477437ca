// src/modules/content/application/views/personal.rs

use serde::Serialize;

use crate::modules::content::domain::documents::{PersonalInfo, RichTextBlock, SocialLinks};

// Defaults shown while the personal-info singleton is missing or the store
// is unreachable.
pub const DEFAULT_NAME: &str = "Developer";
pub const DEFAULT_TITLE: &str = "Full Stack Developer";
pub const DEFAULT_LOCATION: &str = "Remote";
pub const DEFAULT_YEARS_OF_EXPERIENCE: u32 = 5;
pub const DEFAULT_BIO: &str =
    "Building modern web applications with a focus on clean code and great user experiences.";
pub const DEFAULT_AVAILABILITY: &str = "Open to opportunities";

//
// ──────────────────────────────────────────────────────────
// Hero (home page)
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfileView {
    pub name: String,
    pub title: String,
    pub bio: String,
    pub availability: String,
    pub location: String,
    pub years_of_experience: u32,
    pub specialties: Vec<String>,
}

impl ProfileView {
    pub fn from_store(info: Option<&PersonalInfo>) -> Self {
        match info {
            Some(info) => Self {
                name: info.name.clone(),
                title: info.title.clone(),
                bio: info.bio.clone(),
                availability: info.availability.label().to_string(),
                location: info
                    .location
                    .clone()
                    .unwrap_or_else(|| DEFAULT_LOCATION.to_string()),
                years_of_experience: info
                    .years_of_experience
                    .unwrap_or(DEFAULT_YEARS_OF_EXPERIENCE),
                specialties: info.specialties.clone().unwrap_or_default(),
            },
            None => Self {
                name: DEFAULT_NAME.to_string(),
                title: DEFAULT_TITLE.to_string(),
                bio: DEFAULT_BIO.to_string(),
                availability: DEFAULT_AVAILABILITY.to_string(),
                location: DEFAULT_LOCATION.to_string(),
                years_of_experience: DEFAULT_YEARS_OF_EXPERIENCE,
                specialties: Vec::new(),
            },
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// About page
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LanguageView {
    pub language: String,
    pub proficiency: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AboutView {
    pub name: String,
    pub title: String,
    pub availability: String,
    pub location: String,
    pub years_of_experience: u32,
    /// Long-form rich text; empty when the document has none, in which case
    /// `about_fallback` carries the stand-in paragraphs.
    pub about: Vec<RichTextBlock>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub about_fallback: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    pub social_links: SocialLinks,
    pub languages: Vec<LanguageView>,
    pub has_resume: bool,
}

impl AboutView {
    pub fn from_store(info: Option<&PersonalInfo>) -> Self {
        let profile = ProfileView::from_store(info);
        let about = info
            .and_then(|i| i.about.clone())
            .unwrap_or_default();
        let about_fallback = if about.is_empty() {
            Some(fallback_about(profile.years_of_experience))
        } else {
            None
        };

        Self {
            name: profile.name,
            title: profile.title,
            availability: profile.availability,
            location: profile.location,
            years_of_experience: profile.years_of_experience,
            about,
            about_fallback,
            email: info.and_then(|i| i.email.clone()),
            phone: info.and_then(|i| i.phone.clone()),
            website: info.and_then(|i| i.website.clone()),
            social_links: info
                .and_then(|i| i.social_links.clone())
                .unwrap_or_default(),
            languages: info
                .and_then(|i| i.languages.clone())
                .unwrap_or_default()
                .into_iter()
                .map(|skill| LanguageView {
                    language: skill.language,
                    proficiency: skill.proficiency.label().to_string(),
                })
                .collect(),
            has_resume: info.map(|i| i.resume.is_some()).unwrap_or(false),
        }
    }
}

fn fallback_about(years: u32) -> Vec<String> {
    vec![
        format!(
            "I'm a passionate full-stack developer with {years}+ years of experience \
             creating innovative web solutions. I love turning complex problems into \
             simple, beautiful designs and building applications that make a difference."
        ),
        "My journey in software development started with curiosity about how websites \
         work, and it has evolved into a deep passion for creating exceptional user \
         experiences with modern technologies."
            .to_string(),
        "When I'm not coding, you can find me exploring new technologies, contributing \
         to open source projects, or sharing knowledge with the developer community."
            .to_string(),
    ]
}
