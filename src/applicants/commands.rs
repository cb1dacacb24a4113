// src/applicants/commands.rs

use tracing::info;

use super::api;
use super::browser::{print_tab, AnalysisCache, Tab};
use super::models::Applicant;
use crate::api::ApiClient;
use crate::common::ClientError;

/// One-shot applicant detail view (non-interactive)
pub async fn show(client: &ApiClient, id: &str, tab: Tab) -> Result<(), ClientError> {
    let applicant = api::get_by_id(client, id).await?;
    print_summary(&applicant);
    print_tab(&applicant, tab, &AnalysisCache::default());
    Ok(())
}

/// Trigger re-verification and print the refreshed record
pub async fn verify(client: &ApiClient, id: &str) -> Result<(), ClientError> {
    println!("Verifying social profiles...");
    let applicant = api::verify_by_id(client, id).await?;
    info!(applicant_id = %applicant.id, "verification complete");
    println!("Social verification complete.");
    print_summary(&applicant);
    print_tab(&applicant, Tab::Social, &AnalysisCache::default());
    Ok(())
}

fn print_summary(applicant: &Applicant) {
    println!("{} ({})", applicant.display_name(), applicant.id);
    if let Some(location) = &applicant.location {
        println!("Location: {}", location);
    }
    let score = applicant
        .score
        .map(|s| s.to_string())
        .unwrap_or_else(|| "-".to_string());
    println!(
        "Match score: {}  [{}]",
        score,
        applicant.status.as_deref().unwrap_or("unknown")
    );
    if let Some(verdict) = &applicant.verdict {
        println!("Verdict: {}", verdict);
    }
    if let Some(reason) = &applicant.failure_reason {
        println!("Failure reason: {}", reason);
    }
    if let Some(url) = applicant.resume_url() {
        println!("Resume: {}", url);
    }
}
