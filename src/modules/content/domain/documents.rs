// src/modules/content/domain/documents.rs

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

//
// ──────────────────────────────────────────────────────────
// Closed value sets
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Availability {
    Available,
    Open,
    Unavailable,
    Freelance,
}

impl Availability {
    pub fn label(&self) -> &'static str {
        match self {
            Availability::Available => "Available for work",
            Availability::Open => "Open to opportunities",
            Availability::Unavailable => "Not available",
            Availability::Freelance => "Freelance only",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TechnologyCategory {
    Frontend,
    Backend,
    Database,
    DevOps,
    Mobile,
    Cloud,
    Testing,
    Design,
    Other,
}

impl TechnologyCategory {
    /// Fixed order of the category cards on the site. `Other` is stored but
    /// not shown as its own group, matching the upstream stack section.
    pub const DISPLAY_ORDER: [TechnologyCategory; 8] = [
        TechnologyCategory::Frontend,
        TechnologyCategory::Backend,
        TechnologyCategory::Database,
        TechnologyCategory::DevOps,
        TechnologyCategory::Mobile,
        TechnologyCategory::Cloud,
        TechnologyCategory::Testing,
        TechnologyCategory::Design,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TechnologyCategory::Frontend => "frontend",
            TechnologyCategory::Backend => "backend",
            TechnologyCategory::Database => "database",
            TechnologyCategory::DevOps => "devops",
            TechnologyCategory::Mobile => "mobile",
            TechnologyCategory::Cloud => "cloud",
            TechnologyCategory::Testing => "testing",
            TechnologyCategory::Design => "design",
            TechnologyCategory::Other => "other",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TechnologyCategory::Frontend => "Frontend",
            TechnologyCategory::Backend => "Backend",
            TechnologyCategory::Database => "Database",
            TechnologyCategory::DevOps => "DevOps",
            TechnologyCategory::Mobile => "Mobile",
            TechnologyCategory::Cloud => "Cloud",
            TechnologyCategory::Testing => "Testing",
            TechnologyCategory::Design => "Design",
            TechnologyCategory::Other => "Other",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectType {
    WebApp,
    MobileApp,
    Api,
    Library,
    Devops,
    Other,
}

impl ProjectType {
    pub fn label(&self) -> &'static str {
        match self {
            ProjectType::WebApp => "Web Application",
            ProjectType::MobileApp => "Mobile Application",
            ProjectType::Api => "API/Backend",
            ProjectType::Library => "Library/Package",
            ProjectType::Devops => "DevOps/Infrastructure",
            ProjectType::Other => "Other",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectStatus {
    #[default]
    Development,
    Completed,
    Maintained,
    Archived,
}

impl ProjectStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ProjectStatus::Development => "In Development",
            ProjectStatus::Completed => "Completed",
            ProjectStatus::Maintained => "Maintained",
            ProjectStatus::Archived => "Archived",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmploymentType {
    #[default]
    Fulltime,
    Parttime,
    Contract,
    Freelance,
    Internship,
}

impl EmploymentType {
    pub fn label(&self) -> &'static str {
        match self {
            EmploymentType::Fulltime => "Full-time",
            EmploymentType::Parttime => "Part-time",
            EmploymentType::Contract => "Contract",
            EmploymentType::Freelance => "Freelance",
            EmploymentType::Internship => "Internship",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectRole {
    Fullstack,
    Frontend,
    Backend,
    Lead,
    Solo,
    Devops,
}

impl ProjectRole {
    pub fn label(&self) -> &'static str {
        match self {
            ProjectRole::Fullstack => "Full Stack Developer",
            ProjectRole::Frontend => "Frontend Developer",
            ProjectRole::Backend => "Backend Developer",
            ProjectRole::Lead => "Lead Developer",
            ProjectRole::Solo => "Solo Developer",
            ProjectRole::Devops => "DevOps Engineer",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LanguageProficiency {
    Native,
    Fluent,
    Advanced,
    Intermediate,
    Basic,
}

impl LanguageProficiency {
    pub fn label(&self) -> &'static str {
        match self {
            LanguageProficiency::Native => "Native",
            LanguageProficiency::Fluent => "Fluent",
            LanguageProficiency::Advanced => "Advanced",
            LanguageProficiency::Intermediate => "Intermediate",
            LanguageProficiency::Basic => "Basic",
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Shared fragments
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slug {
    pub current: String,
}

/// One node of the store's rich-text block tree. Block-to-markup rendering
/// is the frontend's job; the service passes the tree through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RichTextBlock {
    #[serde(rename = "_type")]
    pub node_type: String,
    #[serde(flatten)]
    pub content: serde_json::Map<String, serde_json::Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLinks {
    pub github: Option<String>,
    pub linkedin: Option<String>,
    pub twitter: Option<String>,
    pub instagram: Option<String>,
    pub youtube: Option<String>,
    pub medium: Option<String>,
    pub dev: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageSkill {
    pub language: String,
    pub proficiency: LanguageProficiency,
}

//
// ──────────────────────────────────────────────────────────
// Documents (reference fields arrive already dereferenced)
// ──────────────────────────────────────────────────────────
//

/// Singleton. Zero instances is a normal pre-population state and every
/// consumer must tolerate it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalInfo {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub title: String,
    pub bio: String,
    #[serde(default)]
    pub about: Option<Vec<RichTextBlock>>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub social_links: Option<SocialLinks>,
    pub availability: Availability,
    #[serde(default)]
    pub years_of_experience: Option<u32>,
    #[serde(default)]
    pub specialties: Option<Vec<String>>,
    #[serde(default)]
    pub languages: Option<Vec<LanguageSkill>>,
    #[serde(default)]
    pub resume: Option<serde_json::Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Technology {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub slug: Slug,
    pub category: TechnologyCategory,
    /// Always in 1..=5; the store enforces the range at write time.
    pub proficiency_level: u8,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub years_of_experience: Option<u32>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub order: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub slug: Slug,
    pub description: String,
    #[serde(default)]
    pub long_description: Option<Vec<RichTextBlock>>,
    #[serde(default)]
    pub technologies: Vec<Technology>,
    pub project_type: ProjectType,
    #[serde(default)]
    pub status: ProjectStatus,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub github_url: Option<String>,
    #[serde(default)]
    pub live_url: Option<String>,
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub team_size: Option<u32>,
    #[serde(default)]
    pub my_role: Option<ProjectRole>,
    #[serde(default)]
    pub order: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Experience {
    #[serde(rename = "_id")]
    pub id: String,
    pub company: String,
    pub position: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub employment_type: EmploymentType,
    pub start_date: NaiveDate,
    /// Absent means ongoing.
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub current: bool,
    #[serde(default)]
    pub description: Vec<RichTextBlock>,
    #[serde(default)]
    pub achievements: Option<Vec<String>>,
    #[serde(default)]
    pub technologies: Option<Vec<Technology>>,
    #[serde(default)]
    pub company_website: Option<String>,
    #[serde(default)]
    pub order: i32,
}

impl Experience {
    /// The store allows `current == true` together with an end date. Which
    /// field wins is unspecified upstream, so the contradiction is surfaced
    /// to consumers instead of resolved here.
    pub fn has_date_conflict(&self) -> bool {
        self.current && self.end_date.is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostAuthor {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostCategory {
    pub title: String,
    #[serde(default)]
    pub slug: Option<Slug>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub slug: Slug,
    #[serde(default)]
    pub author: Option<PostAuthor>,
    #[serde(default)]
    pub categories: Option<Vec<PostCategory>>,
    pub published_at: DateTime<Utc>,
    #[serde(default)]
    pub body: Vec<RichTextBlock>,
}
