// src/modules/content/application/views/project.rs

use serde::Serialize;

use crate::modules::content::application::format;
use crate::modules::content::application::views::technology::TechnologyItemView;
use crate::modules::content::domain::documents::{Project, RichTextBlock};

pub const EMPTY_PROJECTS: &str =
    "No projects found. Projects will appear here once they are added to the content studio.";
pub const EMPTY_FEATURED_PROJECTS: &str = "No featured projects yet.";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectCardView {
    pub title: String,
    pub slug: String,
    pub description: String,
    pub project_type: String,
    pub status: String,
    pub featured: bool,
    pub technologies: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub live_url: Option<String>,
}

impl ProjectCardView {
    pub fn from_store(project: &Project) -> Self {
        Self {
            title: project.title.clone(),
            slug: project.slug.current.clone(),
            description: project.description.clone(),
            project_type: project.project_type.label().to_string(),
            status: project.status.label().to_string(),
            featured: project.featured,
            technologies: project.technologies.iter().map(|t| t.name.clone()).collect(),
            github_url: project.github_url.clone(),
            live_url: project.live_url.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectDetailView {
    pub title: String,
    pub slug: String,
    pub description: String,
    pub long_description: Vec<RichTextBlock>,
    pub project_type: String,
    pub status: String,
    pub featured: bool,
    pub technologies: Vec<TechnologyItemView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub live_url: Option<String>,
    /// "January 2023 - March 2024", or "- Present" while no end date is set.
    /// Absent when the project has no start date at all.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeline: Option<String>,
    pub team_size: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

impl ProjectDetailView {
    pub fn from_store(project: &Project) -> Self {
        Self {
            title: project.title.clone(),
            slug: project.slug.current.clone(),
            description: project.description.clone(),
            long_description: project.long_description.clone().unwrap_or_default(),
            project_type: project.project_type.label().to_string(),
            status: project.status.label().to_string(),
            featured: project.featured,
            technologies: project
                .technologies
                .iter()
                .map(TechnologyItemView::from_store)
                .collect(),
            github_url: project.github_url.clone(),
            live_url: project.live_url.clone(),
            timeline: project
                .start_date
                .map(|start| format::date_range(start, project.end_date)),
            team_size: project.team_size.unwrap_or(1),
            role: project.my_role.map(|r| r.label().to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn project(extra: serde_json::Value) -> Project {
        let mut base = json!({
            "_id": "p1",
            "title": "Search Engine",
            "slug": {"current": "search-engine"},
            "description": "Full-text search service.",
            "technologies": [{
                "_id": "t1",
                "name": "Rust",
                "slug": {"current": "rust"},
                "category": "backend",
                "proficiencyLevel": 5
            }],
            "projectType": "api",
            "status": "completed"
        });
        base.as_object_mut()
            .unwrap()
            .extend(extra.as_object().unwrap().clone());
        serde_json::from_value(base).unwrap()
    }

    #[test]
    fn card_maps_labels_and_technology_names() {
        let view = ProjectCardView::from_store(&project(json!({"featured": true})));
        assert_eq!(view.project_type, "API/Backend");
        assert_eq!(view.status, "Completed");
        assert_eq!(view.technologies, vec!["Rust"]);
        assert!(view.featured);
    }

    #[test]
    fn detail_timeline_reads_present_while_ongoing() {
        let view = ProjectDetailView::from_store(&project(json!({
            "startDate": "2023-02-01"
        })));
        assert_eq!(view.timeline.as_deref(), Some("February 2023 - Present"));
    }

    #[test]
    fn detail_without_start_date_has_no_timeline() {
        let view = ProjectDetailView::from_store(&project(json!({})));
        assert_eq!(view.timeline, None);
    }

    #[test]
    fn detail_defaults_team_size_and_omits_missing_role() {
        let view = ProjectDetailView::from_store(&project(json!({})));
        assert_eq!(view.team_size, 1);
        assert_eq!(view.role, None);

        let with_role = ProjectDetailView::from_store(&project(json!({
            "teamSize": 4,
            "myRole": "lead"
        })));
        assert_eq!(with_role.team_size, 4);
        assert_eq!(with_role.role.as_deref(), Some("Lead Developer"));
    }
}
