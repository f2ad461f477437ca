// src/modules/content/application/views/experience.rs

use chrono::NaiveDate;
use serde::Serialize;

use crate::modules::content::application::format;
use crate::modules::content::domain::documents::{Experience, RichTextBlock};

pub const EMPTY_EXPERIENCE: &str =
    "No experience entries found. Work experience will appear here once added to the content studio.";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExperienceItemView {
    pub position: String,
    pub company: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_website: Option<String>,
    pub employment_type: String,
    pub current: bool,
    pub date_range: String,
    pub duration: String,
    pub description: Vec<RichTextBlock>,
    pub achievements: Vec<String>,
    pub technologies: Vec<String>,
    /// Set when the stored document contradicts itself (`current` with an
    /// end date). Surfaced for operators/editors; the fields above still
    /// show the stored values unresolved.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_warning: Option<String>,
}

impl ExperienceItemView {
    pub fn from_store(exp: &Experience, today: NaiveDate) -> Self {
        let data_warning = exp.has_date_conflict().then(|| {
            format!(
                "Experience at {} is marked current but has an end date",
                exp.company
            )
        });

        Self {
            position: exp.position.clone(),
            company: exp.company.clone(),
            location: exp.location.clone(),
            company_website: exp.company_website.clone(),
            employment_type: exp.employment_type.label().to_string(),
            current: exp.current,
            date_range: format::date_range(exp.start_date, exp.end_date),
            duration: format::duration(exp.start_date, exp.end_date, today),
            description: exp.description.clone(),
            achievements: exp.achievements.clone().unwrap_or_default(),
            technologies: exp
                .technologies
                .as_deref()
                .unwrap_or_default()
                .iter()
                .map(|t| t.name.clone())
                .collect(),
            data_warning,
        }
    }
}
