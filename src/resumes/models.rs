// src/resumes/models.rs

use serde::{Deserialize, Serialize};

// ============================================================================
// Resume Models
// ============================================================================

/// Uploaded resume file. The processing status enumeration is server-defined
/// (PENDING/PROCESSING/DONE/FAILED observed); it is carried as a plain string
/// and rendered as-is when it falls outside the known set.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resume {
    #[serde(rename = "_id", default)]
    pub id: Option<String>,
    #[serde(default)]
    pub original_name: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl Resume {
    pub fn display_name(&self) -> &str {
        self.original_name.as_deref().unwrap_or("(unnamed)")
    }
}

/// Per-file result of the upload fan-out; completion order is arbitrary, so
/// the file name travels with the outcome
#[derive(Debug)]
pub struct UploadOutcome {
    pub file: String,
    pub result: Result<Resume, crate::common::ClientError>,
}

/// Counts (succeeded, failed) over a batch of upload outcomes
pub fn summarize(outcomes: &[UploadOutcome]) -> (usize, usize) {
    let succeeded = outcomes.iter().filter(|o| o.result.is_ok()).count();
    (succeeded, outcomes.len() - succeeded)
}
