// src/reports/tests/ranking_tests.rs

#[cfg(test)]
mod tests {
    use crate::reports::models::ApplicantSummary;
    use crate::reports::ranking::rank;

    fn applicant(id: &str, score: Option<f64>) -> ApplicantSummary {
        ApplicantSummary {
            id: id.to_string(),
            name: Some(format!("Applicant {}", id)),
            location: None,
            score,
            status: Some("VERIFIED".to_string()),
        }
    }

    #[test]
    fn test_rank_sorts_by_descending_score() {
        let results = vec![
            applicant("a", Some(10.0)),
            applicant("b", Some(90.0)),
            applicant("c", Some(90.0)),
            applicant("d", Some(5.0)),
        ];

        let ranked = rank(&results);
        let order: Vec<&str> = ranked.iter().map(|r| r.applicant.id.as_str()).collect();

        // [10, 90, 90, 5] displays as [90, 90, 10, 5]
        assert_eq!(order, vec!["b", "c", "a", "d"]);
        assert_eq!(ranked[0].rank, 1);
        assert_eq!(ranked[3].rank, 4);
    }

    #[test]
    fn test_rank_ties_keep_input_order() {
        // stable sort: equal scores must not be reordered
        let results = vec![
            applicant("first", Some(50.0)),
            applicant("second", Some(50.0)),
            applicant("third", Some(50.0)),
        ];

        let ranked = rank(&results);
        let order: Vec<&str> = ranked.iter().map(|r| r.applicant.id.as_str()).collect();
        assert_eq!(order, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_rank_missing_score_counts_as_zero() {
        let results = vec![
            applicant("unscored", None),
            applicant("scored", Some(1.0)),
            applicant("zero", Some(0.0)),
        ];

        let ranked = rank(&results);
        let order: Vec<&str> = ranked.iter().map(|r| r.applicant.id.as_str()).collect();
        // the missing score ties with 0.0 and keeps input order against it
        assert_eq!(order, vec!["scored", "unscored", "zero"]);
    }

    #[test]
    fn test_rank_does_not_mutate_input() {
        let results = vec![applicant("a", Some(1.0)), applicant("b", Some(2.0))];
        let _ = rank(&results);
        assert_eq!(results[0].id, "a");
        assert_eq!(results[1].id, "b");
    }

    #[test]
    fn test_rank_empty_results() {
        assert!(rank(&[]).is_empty());
    }
}
