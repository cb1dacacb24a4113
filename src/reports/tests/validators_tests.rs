// src/reports/tests/validators_tests.rs

#[cfg(test)]
mod tests {
    use crate::common::Validator;
    use crate::reports::models::*;
    use crate::reports::validators::*;

    fn priority(skills: u32, experience: u32, projects: u32, location: u32, qualifications: u32) -> Priority {
        Priority {
            skills,
            experience,
            projects,
            location,
            qualifications,
        }
    }

    #[test]
    fn test_priority_sum_exactly_100_is_allowed() {
        let result = PriorityValidator.validate(&priority(40, 30, 20, 5, 5));
        assert!(result.is_valid);
        assert!(result.errors.is_empty());
    }

    #[test]
    fn test_priority_sum_99_is_rejected() {
        let result = PriorityValidator.validate(&priority(40, 30, 20, 5, 4));
        assert!(!result.is_valid);
        assert!(result.errors.iter().any(|e| e.field == "priority"));
    }

    #[test]
    fn test_priority_sum_101_is_rejected() {
        let result = PriorityValidator.validate(&priority(40, 30, 20, 5, 6));
        assert!(!result.is_valid);
    }

    #[test]
    fn test_priority_single_weight_over_100_is_rejected() {
        let result = PriorityValidator.validate(&priority(200, 0, 0, 0, 0));
        assert!(!result.is_valid);
        assert!(result.errors.iter().any(|e| e.field == "skills"));
    }

    #[test]
    fn test_priority_all_in_one_category_is_allowed() {
        let result = PriorityValidator.validate(&priority(100, 0, 0, 0, 0));
        assert!(result.is_valid);
    }

    #[test]
    fn test_default_preset_is_valid() {
        assert_eq!(Priority::default().total(), 100);
        assert!(PriorityValidator.validate(&Priority::default()).is_valid);
    }

    #[test]
    fn test_report_request_requires_job_and_folder() {
        let request = CreateReport {
            job_id: "".to_string(),
            folder_id: "  ".to_string(),
            priority: Priority::default(),
        };

        let result = ReportRequestValidator.validate(&request);
        assert!(!result.is_valid);
        assert!(result.errors.iter().any(|e| e.field == "jobId"));
        assert!(result.errors.iter().any(|e| e.field == "folderId"));
    }

    #[test]
    fn test_report_request_merges_priority_errors() {
        let request = CreateReport {
            job_id: "j-1".to_string(),
            folder_id: "f-1".to_string(),
            priority: priority(50, 50, 50, 0, 0),
        };

        let result = ReportRequestValidator.validate(&request);
        assert!(!result.is_valid);
        assert!(result.errors.iter().any(|e| e.field == "priority"));
    }

    #[test]
    fn test_create_report_wire_shape() {
        let request = CreateReport {
            job_id: "j-1".to_string(),
            folder_id: "f-1".to_string(),
            priority: Priority::default(),
        };
        let body = serde_json::to_value(&request).expect("serialize");
        assert_eq!(body["jobId"], "j-1");
        assert_eq!(body["folderId"], "f-1");
        // canonical field name is `priority`, singular
        assert!(body.get("priority").is_some());
        assert!(body.get("priorities").is_none());
        assert_eq!(body["priority"]["skills"], 40);
    }
}
