// src/jobs/models.rs

use serde::{Deserialize, Serialize};

// ============================================================================
// Job Models
// ============================================================================

/// Job posting as returned by the backend
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub skill_required: Vec<String>,
    #[serde(default)]
    pub experience_required: Option<i64>,
    #[serde(default)]
    pub vacancies: Option<i64>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateJob {
    pub title: String,
    pub description: String,
    pub skill_required: Vec<String>,
    pub experience_required: i64,
    pub vacancies: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

/// Partial update; absent fields are left untouched server-side
#[derive(Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateJob {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skill_required: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub experience_required: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vacancies: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

impl UpdateJob {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.skill_required.is_none()
            && self.experience_required.is_none()
            && self.vacancies.is_none()
            && self.location.is_none()
    }
}

/// Splits a comma-separated skills argument into the ordered list the API
/// expects, dropping empty segments
pub fn parse_skills(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
