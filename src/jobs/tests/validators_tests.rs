// src/jobs/tests/validators_tests.rs

#[cfg(test)]
mod tests {
    use crate::common::Validator;
    use crate::jobs::models::*;
    use crate::jobs::validators::*;

    fn valid_create() -> CreateJob {
        CreateJob {
            title: "Backend Engineer".to_string(),
            description: "Rust services".to_string(),
            skill_required: vec!["Rust".to_string(), "SQL".to_string()],
            experience_required: 3,
            vacancies: 2,
            location: Some("Remote".to_string()),
        }
    }

    #[test]
    fn test_job_validator_valid_data() {
        let result = JobValidator.validate(&valid_create());
        assert!(result.is_valid);
        assert!(result.errors.is_empty());
    }

    #[test]
    fn test_job_validator_empty_title() {
        let mut request = valid_create();
        request.title = "   ".to_string();

        let result = JobValidator.validate(&request);
        assert!(!result.is_valid);
        assert!(result.errors.iter().any(|e| e.field == "title"));
    }

    #[test]
    fn test_job_validator_negative_experience() {
        let mut request = valid_create();
        request.experience_required = -1;

        let result = JobValidator.validate(&request);
        assert!(!result.is_valid);
        assert!(result.errors.iter().any(|e| e.field == "experience"));
    }

    #[test]
    fn test_job_validator_zero_vacancies() {
        let mut request = valid_create();
        request.vacancies = 0;

        let result = JobValidator.validate(&request);
        assert!(!result.is_valid);
        assert!(result.errors.iter().any(|e| e.field == "vacancies"));
    }

    #[test]
    fn test_update_validator_rejects_empty_update() {
        let result = JobValidator.validate(&UpdateJob::default());
        assert!(!result.is_valid);
        assert!(result.errors.iter().any(|e| e.field == "update"));
    }

    #[test]
    fn test_parse_skills_trims_and_drops_empty() {
        assert_eq!(
            parse_skills(" Rust, SQL ,,  Docker "),
            vec!["Rust".to_string(), "SQL".to_string(), "Docker".to_string()]
        );
        assert!(parse_skills("  ,  ").is_empty());
    }

    #[test]
    fn test_create_job_wire_names_are_camel_case() {
        let body = serde_json::to_value(valid_create()).expect("serialize");
        assert!(body.get("skillRequired").is_some());
        assert!(body.get("experienceRequired").is_some());
        assert!(body.get("skill_required").is_none());
    }
}
