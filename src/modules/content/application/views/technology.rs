// src/modules/content/application/views/technology.rs

use serde::Serialize;

use crate::modules::content::domain::documents::{Technology, TechnologyCategory};

/// Proficiency level at or above which a skill counts as expert.
pub const EXPERT_PROFICIENCY: u8 = 4;

pub const EMPTY_TECHNOLOGIES: &str = "No technologies added yet.";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TechnologyItemView {
    pub name: String,
    pub slug: String,
    pub proficiency_level: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub years_of_experience: Option<u32>,
}

impl TechnologyItemView {
    pub fn from_store(tech: &Technology) -> Self {
        Self {
            name: tech.name.clone(),
            slug: tech.slug.current.clone(),
            proficiency_level: tech.proficiency_level,
            color: tech.color.clone(),
            years_of_experience: tech.years_of_experience,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TechnologyGroupView {
    pub category: &'static str,
    pub label: &'static str,
    pub items: Vec<TechnologyItemView>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TechnologySummaryView {
    pub total: usize,
    pub expert_count: usize,
    pub category_count: usize,
    pub average_proficiency_pct: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TechnologyStackView {
    pub groups: Vec<TechnologyGroupView>,
    /// Absent while there are no technologies at all.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<TechnologySummaryView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub empty_message: Option<&'static str>,
}

impl TechnologyStackView {
    pub fn from_store(technologies: &[Technology]) -> Self {
        let groups = group_by_category(technologies);
        let summary = summarize(technologies, &groups);
        let empty_message = technologies.is_empty().then_some(EMPTY_TECHNOLOGIES);
        Self {
            groups,
            summary,
            empty_message,
        }
    }
}

/// Groups into the eight fixed display categories, skipping empty groups.
/// `other`-category documents are stored and counted, but have no group of
/// their own, matching the site's stack section.
fn group_by_category(technologies: &[Technology]) -> Vec<TechnologyGroupView> {
    TechnologyCategory::DISPLAY_ORDER
        .iter()
        .filter_map(|category| {
            let items: Vec<TechnologyItemView> = technologies
                .iter()
                .filter(|t| t.category == *category)
                .map(TechnologyItemView::from_store)
                .collect();
            if items.is_empty() {
                None
            } else {
                Some(TechnologyGroupView {
                    category: category.as_str(),
                    label: category.label(),
                    items,
                })
            }
        })
        .collect()
}

fn summarize(
    technologies: &[Technology],
    groups: &[TechnologyGroupView],
) -> Option<TechnologySummaryView> {
    if technologies.is_empty() {
        return None;
    }

    let total = technologies.len();
    let expert_count = technologies
        .iter()
        .filter(|t| t.proficiency_level >= EXPERT_PROFICIENCY)
        .count();
    let sum: u32 = technologies
        .iter()
        .map(|t| u32::from(t.proficiency_level))
        .sum();
    let average_proficiency_pct = ((f64::from(sum) / total as f64) * 20.0).round() as u32;

    Some(TechnologySummaryView {
        total,
        expert_count,
        category_count: groups.len(),
        average_proficiency_pct,
    })
}
