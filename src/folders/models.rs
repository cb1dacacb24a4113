// src/folders/models.rs

use serde::{Deserialize, Serialize};

use crate::resumes::Resume;

// ============================================================================
// Folder Models
// ============================================================================

/// Resume folder: uploaded files plus the subset that completed extraction
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Folder {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub total_files: Vec<Resume>,
    #[serde(default)]
    pub processed_files: Vec<Resume>,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl Folder {
    pub fn total_count(&self) -> usize {
        self.total_files.len()
    }

    pub fn processed_count(&self) -> usize {
        self.processed_files.len()
    }
}

#[derive(Debug, Serialize)]
pub struct CreateFolder {
    pub title: String,
}

#[derive(Debug, Serialize)]
pub struct UpdateFolder {
    pub title: String,
}
