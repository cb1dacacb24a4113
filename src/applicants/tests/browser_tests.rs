// src/applicants/tests/browser_tests.rs

#[cfg(test)]
mod tests {
    use crate::applicants::browser::{AnalysisCache, SiblingCursor, Tab};
    use crate::applicants::models::Applicant;
    use crate::projects::models::ProjectAnalysis;

    fn ids(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("applicant-{}", i)).collect()
    }

    // ------------------------------------------------------------------
    // Sibling cursor
    // ------------------------------------------------------------------

    #[test]
    fn test_cursor_empty_list_is_none() {
        assert!(SiblingCursor::new(Vec::new(), 0).is_none());
    }

    #[test]
    fn test_cursor_clamps_start_index() {
        let cursor = SiblingCursor::new(ids(3), 99).expect("cursor");
        assert_eq!(cursor.index(), 2);
        assert_eq!(cursor.current(), "applicant-2");
    }

    #[test]
    fn test_cursor_prev_disabled_at_start() {
        let cursor = SiblingCursor::new(ids(3), 0).expect("cursor");
        assert!(!cursor.has_prev());
        assert!(cursor.prev().is_none());
        assert!(cursor.has_next());
    }

    #[test]
    fn test_cursor_next_disabled_at_end() {
        let cursor = SiblingCursor::new(ids(3), 2).expect("cursor");
        assert!(!cursor.has_next());
        assert!(cursor.next().is_none());
        assert!(cursor.has_prev());
    }

    #[test]
    fn test_cursor_moves_by_exactly_one() {
        let mut cursor = SiblingCursor::new(ids(3), 1).expect("cursor");
        assert!(cursor.has_prev());
        assert!(cursor.has_next());

        let (index, id) = cursor.next().expect("proposal");
        assert_eq!(index, 2);
        assert_eq!(id, "applicant-2");
        // the proposal alone does not move the cursor
        assert_eq!(cursor.index(), 1);

        cursor.commit(index);
        assert_eq!(cursor.index(), 2);
        assert_eq!(cursor.current(), "applicant-2");

        let (index, id) = cursor.prev().expect("proposal");
        assert_eq!(index, 1);
        assert_eq!(id, "applicant-1");
        cursor.commit(index);
        assert_eq!(cursor.index(), 1);
    }

    #[test]
    fn test_cursor_failed_fetch_leaves_position() {
        // a proposed move that is never committed (fetch failed) leaves the
        // displayed applicant unchanged
        let mut cursor = SiblingCursor::new(ids(2), 0).expect("cursor");
        let _ = cursor.next().expect("proposal");
        assert_eq!(cursor.current(), "applicant-0");
        cursor.commit(cursor.index()); // no-op commit
        assert_eq!(cursor.current(), "applicant-0");
    }

    #[test]
    fn test_cursor_single_entry_has_no_moves() {
        let cursor = SiblingCursor::new(ids(1), 0).expect("cursor");
        assert!(!cursor.has_prev());
        assert!(!cursor.has_next());
    }

    // ------------------------------------------------------------------
    // Tabs
    // ------------------------------------------------------------------

    #[test]
    fn test_initial_tab_is_overview() {
        assert_eq!(Tab::default(), Tab::Overview);
    }

    #[test]
    fn test_tab_parsing_covers_closed_set() {
        for tab in Tab::ALL {
            let parsed: Tab = tab.name().parse().expect("tab should parse");
            assert_eq!(parsed, tab);
        }
        assert!("OVERVIEW".parse::<Tab>().is_ok());
        assert!(" social ".parse::<Tab>().is_ok());
        assert!("resume".parse::<Tab>().is_err());
    }

    // ------------------------------------------------------------------
    // Analysis cache
    // ------------------------------------------------------------------

    fn analysis(is_safe: bool) -> ProjectAnalysis {
        serde_json::from_value(serde_json::json!({
            "isSafe": is_safe,
            "threat": if is_safe { serde_json::Value::Null } else { "malware".into() },
            "seo": { "score": 72.5 }
        }))
        .expect("analysis fixture")
    }

    #[test]
    fn test_analysis_cache_keyed_by_url() {
        let mut cache = AnalysisCache::default();
        assert!(cache.get("https://repo.example/a").is_none());

        cache.insert("https://repo.example/a".to_string(), analysis(true));
        assert!(cache.get("https://repo.example/a").is_some());
        assert!(cache.get("https://repo.example/b").is_none());
    }

    #[test]
    fn test_analysis_cache_retrigger_overwrites() {
        let mut cache = AnalysisCache::default();
        cache.insert("https://repo.example/a".to_string(), analysis(true));
        cache.insert("https://repo.example/a".to_string(), analysis(false));

        let cached = cache.get("https://repo.example/a").expect("entry");
        assert_eq!(cached.is_safe, Some(false));
    }

    // ------------------------------------------------------------------
    // Payload shape
    // ------------------------------------------------------------------

    #[test]
    fn test_applicant_deserializes_sparse_payload() {
        // backend payloads are open-ended; only the id is required
        let applicant: Applicant =
            serde_json::from_str(r#"{"_id":"a-1"}"#).expect("sparse applicant should parse");
        assert_eq!(applicant.id, "a-1");
        assert_eq!(applicant.display_name(), "(unnamed)");
        assert!(applicant.skills.is_empty());
        assert!(applicant.resume_url().is_none());
    }

    #[test]
    fn test_applicant_deserializes_full_payload() {
        let applicant: Applicant = serde_json::from_str(
            r#"{
                "_id": "a-2",
                "name": "Jordan",
                "location": "Berlin",
                "score": 87.5,
                "status": "VERIFIED",
                "verdict": "Strong backend profile",
                "failureReason": null,
                "skills": ["Rust", "Postgres"],
                "experience": [{"title": "Engineer", "company": "Acme", "duration": 18}],
                "projects": [{"title": "cache", "link": "https://repo.example/cache"}],
                "qualifications": [{"institute": "TU", "course": "CS", "marks": 8.9}],
                "certificates": [{"title": "CKA"}],
                "social": {"email": "j@example.com", "Phone": "+49", "github": "https://gh/j",
                           "portfolio": ["https://a", "https://b"]},
                "authentication": [{"platform": "github", "stats": {"repos": 12}}],
                "resume": {"cloudinary": {"url": "https://files/cv.pdf"}}
            }"#,
        )
        .expect("full applicant should parse");

        assert_eq!(applicant.display_name(), "Jordan");
        assert_eq!(applicant.resume_url(), Some("https://files/cv.pdf"));
        assert_eq!(applicant.projects[0].link.as_deref(), Some("https://repo.example/cache"));
        assert_eq!(applicant.authentication[0].platform.as_deref(), Some("github"));
        assert!(applicant.authentication[0].error.is_none());
    }
}
