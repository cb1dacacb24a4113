// src/reports/ranking.rs
//
// Display ordering for a report's applicant results. Rank is computed at
// render time from the score, never read from a stored field.

use super::models::ApplicantSummary;

/// One row of the ranked display: 1-based position in the sorted sequence
#[derive(Debug)]
pub struct Ranked<'a> {
    pub rank: usize,
    pub applicant: &'a ApplicantSummary,
}

/// Sorts a copy of the results by descending score and assigns 1-based ranks.
///
/// A missing score counts as 0. The sort is stable: applicants with equal
/// scores keep their relative input order, so the rank numbers shown are
/// reproducible across renders.
pub fn rank(results: &[ApplicantSummary]) -> Vec<Ranked<'_>> {
    let mut ordered: Vec<&ApplicantSummary> = results.iter().collect();
    ordered.sort_by(|a, b| score_of(b).total_cmp(&score_of(a)));
    ordered
        .into_iter()
        .enumerate()
        .map(|(i, applicant)| Ranked {
            rank: i + 1,
            applicant,
        })
        .collect()
}

fn score_of(applicant: &ApplicantSummary) -> f64 {
    applicant.score.unwrap_or(0.0)
}
