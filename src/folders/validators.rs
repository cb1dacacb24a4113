// src/folders/validators.rs

use super::models::*;
use crate::common::{ValidationResult, Validator};

pub struct FolderValidator;

impl Validator<CreateFolder> for FolderValidator {
    fn validate(&self, data: &CreateFolder) -> ValidationResult {
        let mut result = ValidationResult::new();
        validate_title(&data.title, &mut result);
        result
    }
}

impl Validator<UpdateFolder> for FolderValidator {
    fn validate(&self, data: &UpdateFolder) -> ValidationResult {
        let mut result = ValidationResult::new();
        validate_title(&data.title, &mut result);
        result
    }
}

fn validate_title(title: &str, result: &mut ValidationResult) {
    if title.trim().is_empty() {
        result.add_error("title", "Folder title is required");
    } else if title.len() > 255 {
        result.add_error("title", "Folder title must be less than 255 characters");
    }
}
