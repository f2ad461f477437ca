// src/modules/content/domain/schema.rs
//
// Write-time validation contract of the content store, reproduced as an
// executable document linter. The read pipeline never enforces these rules
// (documents are assumed valid once stored); the linter backs the editor-side
// `/api/schema/check` route and the test suite.

use std::str::FromStr;
use std::sync::OnceLock;

use chrono::{DateTime, NaiveDate};
use email_address::EmailAddress;
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use url::Url;

use crate::modules::content::domain::documents::{
    Availability, EmploymentType, LanguageProficiency, ProjectRole, ProjectStatus, ProjectType,
    TechnologyCategory,
};

pub const BIO_MAX_LEN: usize = 500;
pub const DESCRIPTION_MAX_LEN: usize = 200;
pub const SLUG_MAX_LEN: usize = 96;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentType {
    Personal,
    Technology,
    Project,
    Experience,
    Post,
}

impl DocumentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentType::Personal => "personal",
            DocumentType::Technology => "technology",
            DocumentType::Project => "project",
            DocumentType::Experience => "experience",
            DocumentType::Post => "post",
        }
    }
}

#[derive(Debug, Clone, thiserror::Error)]
#[error("Unknown document type: {0}")]
pub struct UnknownDocumentType(String);

impl FromStr for DocumentType {
    type Err = UnknownDocumentType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "personal" => Ok(DocumentType::Personal),
            "technology" => Ok(DocumentType::Technology),
            "project" => Ok(DocumentType::Project),
            "experience" => Ok(DocumentType::Experience),
            "post" => Ok(DocumentType::Post),
            other => Err(UnknownDocumentType(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    pub field: String,
    pub message: String,
}

impl Violation {
    fn new(field: &str, message: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

/// Lints a draft document against the content model of its type. An empty
/// result means the store would accept the draft.
pub fn check_document(doc_type: DocumentType, doc: &Value) -> Vec<Violation> {
    let mut violations = Vec::new();

    if !doc.is_object() {
        violations.push(Violation::new("$", "Document must be a JSON object"));
        return violations;
    }

    match doc_type {
        DocumentType::Personal => check_personal(doc, &mut violations),
        DocumentType::Technology => check_technology(doc, &mut violations),
        DocumentType::Project => check_project(doc, &mut violations),
        DocumentType::Experience => check_experience(doc, &mut violations),
        DocumentType::Post => check_post(doc, &mut violations),
    }

    violations
}

//
// ──────────────────────────────────────────────────────────
// Per-type rules
// ──────────────────────────────────────────────────────────
//

fn check_personal(doc: &Value, out: &mut Vec<Violation>) {
    require_string(doc, "name", out);
    require_string(doc, "title", out);
    if let Some(bio) = require_string(doc, "bio", out) {
        max_len(bio, "bio", BIO_MAX_LEN, out);
    }
    if let Some(email) = optional_string(doc, "email", out) {
        if EmailAddress::from_str(email).is_err() {
            out.push(Violation::new("email", "Must be a valid e-mail address"));
        }
    }
    optional_url(doc, "website", out);
    require_enum::<Availability>(doc, "availability", out);
    optional_non_negative(doc, "yearsOfExperience", out);

    if let Some(languages) = doc.get("languages") {
        match languages.as_array() {
            Some(items) => {
                for (idx, item) in items.iter().enumerate() {
                    let field = format!("languages[{idx}]");
                    if item.get("language").and_then(Value::as_str).is_none() {
                        out.push(Violation::new(&field, "Missing required field: language"));
                    }
                    if item
                        .get("proficiency")
                        .map(|v| serde_json::from_value::<LanguageProficiency>(v.clone()).is_err())
                        .unwrap_or(true)
                    {
                        out.push(Violation::new(
                            &field,
                            "proficiency must be one of the allowed levels",
                        ));
                    }
                }
            }
            None => out.push(Violation::new("languages", "Must be an array")),
        }
    }
}

fn check_technology(doc: &Value, out: &mut Vec<Violation>) {
    require_string(doc, "name", out);
    require_slug(doc, out);
    require_enum::<TechnologyCategory>(doc, "category", out);

    match doc.get("proficiencyLevel").and_then(Value::as_i64) {
        Some(level) if (1..=5).contains(&level) => {}
        Some(_) => out.push(Violation::new(
            "proficiencyLevel",
            "Must be between 1 and 5",
        )),
        None => out.push(Violation::new(
            "proficiencyLevel",
            "Missing required field",
        )),
    }

    if let Some(color) = optional_string(doc, "color", out) {
        if !hex_color_re().is_match(color) {
            out.push(Violation::new("color", "Must be a hex color code"));
        }
    }
    optional_non_negative(doc, "yearsOfExperience", out);
}

fn check_project(doc: &Value, out: &mut Vec<Violation>) {
    require_string(doc, "title", out);
    require_slug(doc, out);
    if let Some(description) = require_string(doc, "description", out) {
        max_len(description, "description", DESCRIPTION_MAX_LEN, out);
    }
    require_references(doc, "technologies", DocumentType::Technology, 1, out);
    require_enum::<ProjectType>(doc, "projectType", out);
    optional_enum::<ProjectStatus>(doc, "status", out);
    optional_enum::<ProjectRole>(doc, "myRole", out);
    optional_url(doc, "githubUrl", out);
    optional_url(doc, "liveUrl", out);

    let start = optional_date(doc, "startDate", out);
    let end = optional_date(doc, "endDate", out);
    if let (Some(start), Some(end)) = (start, end) {
        if end < start {
            out.push(Violation::new(
                "endDate",
                "End date must not be before the start date",
            ));
        }
    }

    if let Some(size) = doc.get("teamSize").and_then(Value::as_i64) {
        if size < 1 {
            out.push(Violation::new("teamSize", "Must be at least 1"));
        }
    }
}

fn check_experience(doc: &Value, out: &mut Vec<Violation>) {
    require_string(doc, "company", out);
    require_string(doc, "position", out);
    optional_enum::<EmploymentType>(doc, "employmentType", out);

    let start = match doc.get("startDate") {
        Some(value) => parse_date(value, "startDate", out),
        None => {
            out.push(Violation::new("startDate", "Missing required field"));
            None
        }
    };
    let end = optional_date(doc, "endDate", out);
    if let (Some(start), Some(end)) = (start, end) {
        if end < start {
            out.push(Violation::new(
                "endDate",
                "End date must not be before the start date",
            ));
        }
    }

    match doc.get("description").and_then(Value::as_array) {
        Some(blocks) if !blocks.is_empty() => {}
        _ => out.push(Violation::new("description", "Missing required field")),
    }

    if let Some(achievements) = doc.get("achievements") {
        let all_strings = achievements
            .as_array()
            .map(|items| items.iter().all(Value::is_string))
            .unwrap_or(false);
        if !all_strings {
            out.push(Violation::new("achievements", "Must be a list of strings"));
        }
    }

    require_references(doc, "technologies", DocumentType::Technology, 0, out);
    optional_url(doc, "companyWebsite", out);
}

fn check_post(doc: &Value, out: &mut Vec<Violation>) {
    require_string(doc, "title", out);
    require_slug(doc, out);

    match doc.get("publishedAt").and_then(Value::as_str) {
        Some(raw) => {
            if DateTime::parse_from_rfc3339(raw).is_err() {
                out.push(Violation::new(
                    "publishedAt",
                    "Must be an RFC 3339 timestamp",
                ));
            }
        }
        None => out.push(Violation::new("publishedAt", "Missing required field")),
    }

    match doc.get("body").and_then(Value::as_array) {
        Some(blocks) if !blocks.is_empty() => {}
        _ => out.push(Violation::new("body", "Missing required field")),
    }
}

//
// ──────────────────────────────────────────────────────────
// Field helpers
// ──────────────────────────────────────────────────────────
//

fn require_string<'a>(doc: &'a Value, field: &str, out: &mut Vec<Violation>) -> Option<&'a str> {
    match doc.get(field).and_then(Value::as_str) {
        Some(s) if !s.trim().is_empty() => Some(s),
        _ => {
            out.push(Violation::new(field, "Missing required field"));
            None
        }
    }
}

fn optional_string<'a>(doc: &'a Value, field: &str, out: &mut Vec<Violation>) -> Option<&'a str> {
    match doc.get(field) {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(s.as_str()),
        Some(_) => {
            out.push(Violation::new(field, "Must be a string"));
            None
        }
    }
}

fn max_len(value: &str, field: &str, limit: usize, out: &mut Vec<Violation>) {
    if value.chars().count() > limit {
        out.push(Violation::new(
            field,
            format!("Must be at most {limit} characters"),
        ));
    }
}

fn require_slug(doc: &Value, out: &mut Vec<Violation>) {
    match doc.get("slug").and_then(|s| s.get("current")).and_then(Value::as_str) {
        Some(current) if !current.is_empty() => {
            if current.chars().count() > SLUG_MAX_LEN {
                out.push(Violation::new(
                    "slug",
                    format!("Must be at most {SLUG_MAX_LEN} characters"),
                ));
            }
            if !slug_re().is_match(current) {
                out.push(Violation::new("slug", "Must be URL-safe"));
            }
        }
        _ => out.push(Violation::new("slug", "Missing required field")),
    }
}

fn require_enum<T: serde::de::DeserializeOwned>(
    doc: &Value,
    field: &str,
    out: &mut Vec<Violation>,
) {
    match doc.get(field) {
        Some(value) => enum_value::<T>(value, field, out),
        None => out.push(Violation::new(field, "Missing required field")),
    }
}

fn optional_enum<T: serde::de::DeserializeOwned>(
    doc: &Value,
    field: &str,
    out: &mut Vec<Violation>,
) {
    match doc.get(field) {
        None | Some(Value::Null) => {}
        Some(value) => enum_value::<T>(value, field, out),
    }
}

fn enum_value<T: serde::de::DeserializeOwned>(value: &Value, field: &str, out: &mut Vec<Violation>) {
    if serde_json::from_value::<T>(value.clone()).is_err() {
        out.push(Violation::new(
            field,
            "Must be one of the allowed values",
        ));
    }
}

fn optional_url(doc: &Value, field: &str, out: &mut Vec<Violation>) {
    if let Some(raw) = optional_string(doc, field, out) {
        if Url::parse(raw).is_err() {
            out.push(Violation::new(field, "Must be a valid URL"));
        }
    }
}

fn optional_non_negative(doc: &Value, field: &str, out: &mut Vec<Violation>) {
    match doc.get(field) {
        None | Some(Value::Null) => {}
        Some(value) => match value.as_i64() {
            Some(n) if n >= 0 => {}
            _ => out.push(Violation::new(field, "Must be a non-negative number")),
        },
    }
}

fn optional_date(doc: &Value, field: &str, out: &mut Vec<Violation>) -> Option<NaiveDate> {
    match doc.get(field) {
        None | Some(Value::Null) => None,
        Some(value) => parse_date(value, field, out),
    }
}

fn parse_date(value: &Value, field: &str, out: &mut Vec<Violation>) -> Option<NaiveDate> {
    let parsed = value
        .as_str()
        .and_then(|raw| NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok());
    if parsed.is_none() {
        out.push(Violation::new(field, "Must be a date (YYYY-MM-DD)"));
    }
    parsed
}

/// Write-side lists hold unresolved references (`{_type: "reference", _ref}`);
/// already-dereferenced copies carry the target's own `_type`. Both count as
/// pointing at `target`, anything else is a wrong-target violation.
fn require_references(
    doc: &Value,
    field: &str,
    target: DocumentType,
    min: usize,
    out: &mut Vec<Violation>,
) {
    let items = match doc.get(field) {
        None | Some(Value::Null) if min == 0 => return,
        None | Some(Value::Null) => {
            out.push(Violation::new(field, "Missing required field"));
            return;
        }
        Some(value) => match value.as_array() {
            Some(items) => items,
            None => {
                out.push(Violation::new(field, "Must be an array of references"));
                return;
            }
        },
    };

    if items.len() < min {
        out.push(Violation::new(
            field,
            format!("Must reference at least {min} {} document(s)", target.as_str()),
        ));
    }

    for (idx, item) in items.iter().enumerate() {
        let item_type = item.get("_type").and_then(Value::as_str);
        let valid = match item_type {
            Some("reference") => item.get("_ref").and_then(Value::as_str).is_some(),
            Some(t) => t == target.as_str(),
            None => false,
        };
        if !valid {
            out.push(Violation::new(
                &format!("{field}[{idx}]"),
                format!("Must reference a {} document", target.as_str()),
            ));
        }
    }
}

fn slug_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[A-Za-z0-9][A-Za-z0-9_-]*$").unwrap())
}

fn hex_color_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^#(?:[0-9a-fA-F]{3}|[0-9a-fA-F]{6})$").unwrap())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn violated_fields(doc_type: DocumentType, doc: &Value) -> Vec<String> {
        check_document(doc_type, doc)
            .into_iter()
            .map(|v| v.field)
            .collect()
    }

    #[test]
    fn valid_technology_passes() {
        let doc = json!({
            "name": "PostgreSQL",
            "slug": {"current": "postgresql"},
            "category": "database",
            "proficiencyLevel": 4,
            "color": "#336791",
            "order": 3
        });

        assert!(check_document(DocumentType::Technology, &doc).is_empty());
    }

    #[test]
    fn proficiency_outside_range_is_rejected() {
        let doc = json!({
            "name": "PostgreSQL",
            "slug": {"current": "postgresql"},
            "category": "database",
            "proficiencyLevel": 6
        });

        assert_eq!(
            violated_fields(DocumentType::Technology, &doc),
            vec!["proficiencyLevel"]
        );
    }

    #[test]
    fn project_requires_at_least_one_technology_reference() {
        let doc = json!({
            "title": "Thing",
            "slug": {"current": "thing"},
            "description": "Short.",
            "technologies": [],
            "projectType": "api"
        });

        assert!(violated_fields(DocumentType::Project, &doc)
            .contains(&"technologies".to_string()));
    }

    #[test]
    fn project_technologies_must_point_at_technology_documents() {
        let doc = json!({
            "title": "Thing",
            "slug": {"current": "thing"},
            "description": "Short.",
            "technologies": [
                {"_type": "reference", "_ref": "tech-1"},
                {"_type": "post", "_id": "post-1"}
            ],
            "projectType": "api"
        });

        assert_eq!(
            violated_fields(DocumentType::Project, &doc),
            vec!["technologies[1]"]
        );
    }

    #[test]
    fn project_end_date_must_not_precede_start_date() {
        let doc = json!({
            "title": "Thing",
            "slug": {"current": "thing"},
            "description": "Short.",
            "technologies": [{"_type": "reference", "_ref": "tech-1"}],
            "projectType": "api",
            "startDate": "2023-05-01",
            "endDate": "2023-01-01"
        });

        assert_eq!(
            violated_fields(DocumentType::Project, &doc),
            vec!["endDate"]
        );
    }

    #[test]
    fn long_description_and_bad_email_are_both_reported() {
        let doc = json!({
            "name": "Jane",
            "title": "Engineer",
            "bio": "x".repeat(BIO_MAX_LEN + 1),
            "email": "not-an-email",
            "availability": "available"
        });

        let fields = violated_fields(DocumentType::Personal, &doc);
        assert!(fields.contains(&"bio".to_string()));
        assert!(fields.contains(&"email".to_string()));
    }

    #[test]
    fn closed_enum_rejects_unknown_variant() {
        let doc = json!({
            "name": "Jane",
            "title": "Engineer",
            "bio": "Short bio.",
            "availability": "sabbatical"
        });

        assert_eq!(
            violated_fields(DocumentType::Personal, &doc),
            vec!["availability"]
        );
    }

    #[test]
    fn experience_contradiction_is_not_a_schema_violation() {
        // current + endDate is representable in the store; the contract does
        // not decide which field wins, so the linter stays silent about it.
        let doc = json!({
            "company": "Acme",
            "position": "Engineer",
            "startDate": "2020-01-01",
            "endDate": "2022-01-01",
            "current": true,
            "description": [{"_type": "block"}]
        });

        assert!(check_document(DocumentType::Experience, &doc).is_empty());
    }

    #[test]
    fn document_type_parses_from_wire_names() {
        assert_eq!(
            "experience".parse::<DocumentType>().unwrap(),
            DocumentType::Experience
        );
        assert!("unknown".parse::<DocumentType>().is_err());
    }
}
