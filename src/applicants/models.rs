// src/applicants/models.rs

use std::collections::BTreeMap;

use serde::Deserialize;

// ============================================================================
// Applicant Models
// ============================================================================

/// Full applicant profile extracted from one resume, plus verification
/// results. Every field is backend-owned and passed through as-is; the client
/// only guards optionality.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Applicant {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub score: Option<f64>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub verdict: Option<String>,
    #[serde(default)]
    pub failure_reason: Option<String>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub experience: Vec<ExperienceEntry>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub qualifications: Vec<Qualification>,
    #[serde(default)]
    pub certificates: Vec<Certificate>,
    /// Contact/social links: `email` and `Phone` plus per-platform values
    /// that may be a single URL or a list of URLs
    #[serde(default)]
    pub social: BTreeMap<String, serde_json::Value>,
    #[serde(default)]
    pub authentication: Vec<AuthenticationResult>,
    #[serde(default)]
    pub resume: Option<ResumeLink>,
}

impl Applicant {
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("(unnamed)")
    }

    pub fn resume_url(&self) -> Option<&str> {
        self.resume
            .as_ref()
            .and_then(|r| r.cloudinary.as_ref())
            .and_then(|c| c.url.as_deref())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExperienceEntry {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    /// Months
    #[serde(default)]
    pub duration: Option<i64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Project {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Qualification {
    #[serde(default)]
    pub institute: Option<String>,
    #[serde(default)]
    pub course: Option<String>,
    #[serde(default)]
    pub marks: Option<f64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Certificate {
    #[serde(default)]
    pub title: Option<String>,
}

/// Per-platform social verification outcome: stats on success, error text
/// otherwise
#[derive(Debug, Clone, Deserialize)]
pub struct AuthenticationResult {
    #[serde(default)]
    pub platform: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub stats: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ResumeLink {
    #[serde(default)]
    pub cloudinary: Option<HostedFile>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HostedFile {
    #[serde(default)]
    pub url: Option<String>,
}
