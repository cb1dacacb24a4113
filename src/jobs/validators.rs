// src/jobs/validators.rs

use super::models::*;
use crate::common::{ValidationResult, Validator};

// ============================================================================
// Job Validators
// ============================================================================

pub struct JobValidator;

impl Validator<CreateJob> for JobValidator {
    fn validate(&self, data: &CreateJob) -> ValidationResult {
        let mut result = ValidationResult::new();

        // Validate title
        if data.title.trim().is_empty() {
            result.add_error("title", "Job title is required");
        } else if data.title.len() > 255 {
            result.add_error("title", "Job title must be less than 255 characters");
        }

        // Experience requirement is years, non-negative
        if data.experience_required < 0 {
            result.add_error("experience", "Experience requirement cannot be negative");
        }

        // At least one open position
        if data.vacancies < 1 {
            result.add_error("vacancies", "Vacancy count must be at least 1");
        }

        result
    }
}

impl Validator<UpdateJob> for JobValidator {
    fn validate(&self, data: &UpdateJob) -> ValidationResult {
        let mut result = ValidationResult::new();

        if data.is_empty() {
            result.add_error("update", "Nothing to update");
        }

        if let Some(title) = &data.title {
            if title.trim().is_empty() {
                result.add_error("title", "Job title cannot be empty");
            }
        }

        if let Some(experience) = data.experience_required {
            if experience < 0 {
                result.add_error("experience", "Experience requirement cannot be negative");
            }
        }

        if let Some(vacancies) = data.vacancies {
            if vacancies < 1 {
                result.add_error("vacancies", "Vacancy count must be at least 1");
            }
        }

        result
    }
}
