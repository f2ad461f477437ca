// src/modules/content/application/queries.rs
//
// Query Catalog: one named, parameterized GROQ query per view's data needs.
// Each entry also carries its ordering contract as a local comparator, so the
// pipeline stays deterministic even when the store's own ordering drifts.

use serde_json::Value;

use crate::modules::content::domain::documents::{Experience, Post, Project, Technology};

/// Recent-posts window on the home page.
pub const RECENT_POSTS_LIMIT: usize = 3;

/// A named read-only query. Deterministic given store state: no side
/// effects, no hidden pagination cursors.
#[derive(Debug, Clone, PartialEq)]
pub struct GroqQuery {
    pub name: &'static str,
    pub groq: &'static str,
    /// GROQ parameters, sent as `$name` = JSON value.
    pub params: Vec<(&'static str, Value)>,
}

impl GroqQuery {
    fn new(name: &'static str, groq: &'static str) -> Self {
        Self {
            name,
            groq,
            params: Vec::new(),
        }
    }

    fn with_slug(name: &'static str, groq: &'static str, slug: &str) -> Self {
        Self {
            name,
            groq,
            params: vec![("slug", Value::String(slug.to_string()))],
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Catalog entries
// ──────────────────────────────────────────────────────────
//

pub fn personal_info() -> GroqQuery {
    GroqQuery::new("personal-info", r#"*[_type == "personal"][0]"#)
}

pub fn all_technologies() -> GroqQuery {
    GroqQuery::new(
        "all-technologies",
        r#"*[_type == "technology"] | order(category asc, proficiencyLevel desc)"#,
    )
}

pub fn all_projects() -> GroqQuery {
    GroqQuery::new(
        "all-projects",
        r#"*[_type == "project"] | order(featured desc, order asc) { ..., technologies[]-> }"#,
    )
}

pub fn featured_projects() -> GroqQuery {
    GroqQuery::new(
        "featured-projects",
        r#"*[_type == "project" && featured == true] | order(order asc) { ..., technologies[]-> }"#,
    )
}

pub fn project_by_slug(slug: &str) -> GroqQuery {
    GroqQuery::with_slug(
        "project-by-slug",
        r#"*[_type == "project" && slug.current == $slug][0] { ..., technologies[]-> }"#,
        slug,
    )
}

pub fn all_experience() -> GroqQuery {
    GroqQuery::new(
        "all-experience",
        r#"*[_type == "experience"] | order(current desc, order desc, startDate desc) { ..., technologies[]-> }"#,
    )
}

pub fn recent_posts() -> GroqQuery {
    GroqQuery::new(
        "recent-posts",
        r#"*[_type == "post"] | order(publishedAt desc)[0...3] { ..., author->, categories[]-> }"#,
    )
}

pub fn all_posts() -> GroqQuery {
    GroqQuery::new(
        "all-posts",
        r#"*[_type == "post"] | order(publishedAt desc) { ..., author->, categories[]-> }"#,
    )
}

pub fn post_by_slug(slug: &str) -> GroqQuery {
    GroqQuery::with_slug(
        "post-by-slug",
        r#"*[_type == "post" && slug.current == $slug][0] { ..., author->, categories[]-> }"#,
        slug,
    )
}

//
// ──────────────────────────────────────────────────────────
// Ordering contracts (stable sorts; store insertion order breaks ties)
// ──────────────────────────────────────────────────────────
//

/// category asc (wire name), then proficiency desc.
pub fn order_technologies(items: &mut [Technology]) {
    items.sort_by(|a, b| {
        a.category
            .as_str()
            .cmp(b.category.as_str())
            .then(b.proficiency_level.cmp(&a.proficiency_level))
    });
}

/// featured first, then display order asc.
pub fn order_projects(items: &mut [Project]) {
    items.sort_by(|a, b| b.featured.cmp(&a.featured).then(a.order.cmp(&b.order)));
}

/// featured == true only, display order asc.
pub fn filter_featured(items: Vec<Project>) -> Vec<Project> {
    let mut featured: Vec<Project> = items.into_iter().filter(|p| p.featured).collect();
    featured.sort_by(|a, b| a.order.cmp(&b.order));
    featured
}

/// current first, then display order desc, then start date desc.
pub fn order_experience(items: &mut [Experience]) {
    items.sort_by(|a, b| {
        b.current
            .cmp(&a.current)
            .then(b.order.cmp(&a.order))
            .then(b.start_date.cmp(&a.start_date))
    });
}

/// publish timestamp desc.
pub fn order_posts(items: &mut [Post]) {
    items.sort_by(|a, b| b.published_at.cmp(&a.published_at));
}
