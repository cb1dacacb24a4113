// src/reports/commands.rs

use tracing::{info, warn};

use super::api;
use super::models::*;
use super::ranking::rank;
use super::validators::ReportRequestValidator;
use crate::api::ApiClient;
use crate::applicants::browser;
use crate::common::{confirm, ClientError, Validator};

pub async fn create(client: &ApiClient, req: CreateReport) -> Result<(), ClientError> {
    // Rejected locally before any network call when the weights are off
    ReportRequestValidator.validate(&req).into_result()?;

    let report = api::create(client, &req).await?;
    info!(report_id = %report.id, "report generation started");
    println!(
        "Report generation started: {} [{}]",
        report.id,
        report.status_label()
    );

    let reports = api::list(client).await?;
    print_report_list(&reports);
    Ok(())
}

pub async fn list(client: &ApiClient) -> Result<(), ClientError> {
    let reports = api::list(client).await?;
    print_report_list(&reports);
    Ok(())
}

/// Fetch and render one report with its ranked applicant list.
///
/// A failed or empty fetch is terminal: the user is pointed back at the
/// report list and no retry is attempted.
pub async fn show(client: &ApiClient, id: &str) -> Result<(), ClientError> {
    let report = match api::get_by_id(client, id).await {
        Ok(report) => report,
        Err(e) => {
            warn!(report_id = %id, error = %e, "failed to load report");
            println!("Failed to load report. Back to the list with `smarthire report list`.");
            return Err(e);
        }
    };

    print_report_detail(&report);
    Ok(())
}

/// Open the interactive applicant browser over the report's ranked results
pub async fn browse(client: &ApiClient, id: &str) -> Result<(), ClientError> {
    let report = match api::get_by_id(client, id).await {
        Ok(report) => report,
        Err(e) => {
            warn!(report_id = %id, error = %e, "failed to load report");
            println!("Failed to load report. Back to the list with `smarthire report list`.");
            return Err(e);
        }
    };

    if report.results.is_empty() {
        println!("No applicants in this report yet (still processing, or no matches).");
        return Ok(());
    }

    // The browser receives the display-ordered id list so it can page through
    // siblings without refetching the report
    let ordered_ids: Vec<String> = rank(&report.results)
        .iter()
        .map(|r| r.applicant.id.clone())
        .collect();
    browser::run(client, ordered_ids, 0).await
}

pub async fn delete(client: &ApiClient, id: &str, assume_yes: bool) -> Result<(), ClientError> {
    if !confirm(
        &format!("Are you sure you want to delete report {}?", id),
        assume_yes,
    )? {
        println!("Aborted; report not deleted.");
        return Ok(());
    }

    api::delete(client, id).await?;
    println!("Report deleted.");

    let reports = api::list(client).await?;
    print_report_list(&reports);
    Ok(())
}

fn print_report_list(reports: &[Report]) {
    if reports.is_empty() {
        println!("No reports yet. Generate one with `smarthire report create`.");
        return;
    }

    println!("{} report(s):", reports.len());
    for report in reports {
        println!(
            "  {}  {} / {}  [{}]  {} applicant(s)",
            report.id,
            report.job_title(),
            report.folder_title(),
            report.status_label(),
            report.results.len()
        );
        if let Some(priority) = &report.priority {
            let weights: Vec<String> = priority
                .entries()
                .iter()
                .map(|(name, w)| format!("{} {}%", name, w))
                .collect();
            println!("      priority: {}", weights.join(", "));
        }
    }
}

fn print_report_detail(report: &Report) {
    println!("Report {} [{}]", report.id, report.status_label());
    println!("Job: {}", report.job_title());
    println!("Folder: {}", report.folder_title());

    if let Some(profile) = &report.job_profile {
        println!("\nJob profile:");
        println!("  Title: {}", profile.title.as_deref().unwrap_or("-"));
        println!(
            "  Description: {}",
            profile.description.as_deref().unwrap_or("No description provided")
        );
        println!(
            "  Location: {}",
            profile.location.as_deref().unwrap_or("No location provided")
        );
        println!("  Vacancies: {}", profile.vacancies.unwrap_or(0));
        if !profile.skill_required.is_empty() {
            println!("  Required skills: {}", profile.skill_required.join(", "));
        }
        println!("  Experience: {}y", profile.experience.unwrap_or(0));
    }

    if let Some(priority) = &report.priority {
        println!("\nScoring priority:");
        for (name, weight) in priority.entries() {
            println!("  {:<14} {}%", name, weight);
        }
    }

    println!();
    if report.results.is_empty() {
        println!("No applicants found for this report (still processing, or no matches).");
        return;
    }

    println!("Applicants (sorted by score, highest first):");
    for row in rank(&report.results) {
        let applicant = row.applicant;
        let score = applicant
            .score
            .map(|s| format!("{}", s))
            .unwrap_or_else(|| "-".to_string());
        println!(
            "  #{:<3} {}  {}  score {}  [{}]",
            row.rank,
            applicant.id,
            applicant.name.as_deref().unwrap_or("(unnamed)"),
            score,
            applicant.status.as_deref().unwrap_or("unknown")
        );
    }
    println!("\nBrowse applicants interactively with `smarthire report browse <id>`.");
}
