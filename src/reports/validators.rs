// src/reports/validators.rs

use super::models::*;
use crate::common::{ValidationResult, Validator};

// ============================================================================
// Priority Validators
// ============================================================================

pub struct PriorityValidator;

impl Validator<Priority> for PriorityValidator {
    fn validate(&self, data: &Priority) -> ValidationResult {
        let mut result = ValidationResult::new();

        for (name, weight) in data.entries() {
            if weight > 100 {
                result.add_error(name, "Weight must be between 0 and 100");
            }
        }

        // The core invariant: weights must sum to exactly 100
        let total = data.total();
        if total != 100 {
            result.add_error(
                "priority",
                &format!("Priorities must sum to 100% (got {}%)", total),
            );
        }

        result
    }
}

// ============================================================================
// Report Request Validators
// ============================================================================

pub struct ReportRequestValidator;

impl Validator<CreateReport> for ReportRequestValidator {
    fn validate(&self, data: &CreateReport) -> ValidationResult {
        let mut result = ValidationResult::new();

        if data.job_id.trim().is_empty() {
            result.add_error("jobId", "A job must be selected");
        }
        if data.folder_id.trim().is_empty() {
            result.add_error("folderId", "A folder must be selected");
        }

        result.merge(PriorityValidator.validate(&data.priority));
        result
    }
}
