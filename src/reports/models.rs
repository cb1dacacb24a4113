// src/reports/models.rs

use serde::{Deserialize, Serialize};

// ============================================================================
// Priority Models
// ============================================================================

/// The five weighted percentages that control server-side scoring.
///
/// Client-side invariant: each weight lies in [0,100] and the sum is exactly
/// 100; submission is blocked otherwise. The canonical wire name is
/// `priority` (the `priorities` variant is legacy and unsupported).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Priority {
    #[serde(default)]
    pub skills: u32,
    #[serde(default)]
    pub experience: u32,
    #[serde(default)]
    pub projects: u32,
    #[serde(default)]
    pub location: u32,
    #[serde(default)]
    pub qualifications: u32,
}

impl Priority {
    pub fn total(&self) -> u32 {
        self.skills + self.experience + self.projects + self.location + self.qualifications
    }

    /// (label, weight) pairs in display order
    pub fn entries(&self) -> [(&'static str, u32); 5] {
        [
            ("skills", self.skills),
            ("experience", self.experience),
            ("projects", self.projects),
            ("location", self.location),
            ("qualifications", self.qualifications),
        ]
    }
}

impl Default for Priority {
    /// The preset offered before the user adjusts anything
    fn default() -> Self {
        Self {
            skills: 40,
            experience: 30,
            projects: 20,
            location: 5,
            qualifications: 5,
        }
    }
}

// ============================================================================
// Report Models
// ============================================================================

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateReport {
    pub job_id: String,
    pub folder_id: String,
    pub priority: Priority,
}

/// Scored applicant summary inside a report's `results` list
#[derive(Debug, Clone, Deserialize)]
pub struct ApplicantSummary {
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
}

/// Job/folder reference embedded in a report card
#[derive(Debug, Clone, Deserialize)]
pub struct TitledRef {
    #[serde(default)]
    pub title: Option<String>,
}

/// Snapshot of the job the report was generated against
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobProfile {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub vacancies: Option<i64>,
    #[serde(default)]
    pub skill_required: Vec<String>,
    #[serde(default)]
    pub experience: Option<i64>,
}

/// Generated match report. Created pending, processed asynchronously
/// server-side; the client observes progress only by re-fetching.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub priority: Option<Priority>,
    #[serde(default)]
    pub job: Option<TitledRef>,
    #[serde(default)]
    pub folder: Option<TitledRef>,
    #[serde(default)]
    pub job_profile: Option<JobProfile>,
    #[serde(default)]
    pub results: Vec<ApplicantSummary>,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl Report {
    pub fn job_title(&self) -> &str {
        self.job
            .as_ref()
            .and_then(|j| j.title.as_deref())
            .unwrap_or("Report")
    }

    pub fn folder_title(&self) -> &str {
        self.folder
            .as_ref()
            .and_then(|f| f.title.as_deref())
            .unwrap_or("Folder")
    }

    pub fn status_label(&self) -> &str {
        self.status.as_deref().unwrap_or("PENDING")
    }
}
