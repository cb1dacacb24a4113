//! Tests for resume module

#[cfg(test)]
mod tests {
    use crate::common::ClientError;
    use crate::resumes::models::*;

    fn ok_outcome(file: &str) -> UploadOutcome {
        UploadOutcome {
            file: file.to_string(),
            result: Ok(Resume {
                id: Some("r-1".to_string()),
                original_name: Some(file.to_string()),
                status: Some("PENDING".to_string()),
                url: None,
                created_at: None,
            }),
        }
    }

    fn failed_outcome(file: &str) -> UploadOutcome {
        UploadOutcome {
            file: file.to_string(),
            result: Err(ClientError::Api {
                status: 500,
                message: "extraction queue full".to_string(),
            }),
        }
    }

    #[test]
    fn test_summarize_partial_failure() {
        // 3 files where the 2nd fails: the others still count as succeeded
        let outcomes = vec![
            ok_outcome("a.pdf"),
            failed_outcome("b.pdf"),
            ok_outcome("c.pdf"),
        ];
        assert_eq!(summarize(&outcomes), (2, 1));

        let failed: Vec<&str> = outcomes
            .iter()
            .filter(|o| o.result.is_err())
            .map(|o| o.file.as_str())
            .collect();
        assert_eq!(failed, vec!["b.pdf"]);
    }

    #[test]
    fn test_summarize_empty_batch() {
        assert_eq!(summarize(&[]), (0, 0));
    }

    #[test]
    fn test_resume_display_name_fallback() {
        let resume: Resume = serde_json::from_str(r#"{"_id":"r-9"}"#).expect("parse");
        assert_eq!(resume.display_name(), "(unnamed)");

        let named: Resume = serde_json::from_str(
            r#"{"_id":"r-9","originalName":"cv.pdf","status":"DONE","url":"https://files/cv.pdf"}"#,
        )
        .expect("parse");
        assert_eq!(named.display_name(), "cv.pdf");
        assert_eq!(named.status.as_deref(), Some("DONE"));
    }
}
