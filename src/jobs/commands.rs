// src/jobs/commands.rs

use tracing::info;

use super::api;
use super::models::*;
use super::validators::JobValidator;
use crate::api::ApiClient;
use crate::common::{confirm, ClientError, Validator};

pub async fn create(client: &ApiClient, req: CreateJob) -> Result<(), ClientError> {
    JobValidator.validate(&req).into_result()?;

    let job = api::create(client, &req).await?;
    info!(job_id = %job.id, "job created");
    println!("Job created: {} ({})", job.title, job.id);
    Ok(())
}

pub async fn list(client: &ApiClient) -> Result<(), ClientError> {
    let jobs = api::list(client).await?;
    print_job_list(&jobs);
    Ok(())
}

pub async fn update(client: &ApiClient, id: &str, req: UpdateJob) -> Result<(), ClientError> {
    JobValidator.validate(&req).into_result()?;

    let job = api::update(client, id, &req).await?;
    println!("Job updated: {} ({})", job.title, job.id);
    Ok(())
}

pub async fn delete(client: &ApiClient, id: &str, assume_yes: bool) -> Result<(), ClientError> {
    if !confirm(
        &format!("Are you sure you want to delete job {}?", id),
        assume_yes,
    )? {
        println!("Aborted; job not deleted.");
        return Ok(());
    }

    api::delete(client, id).await?;
    println!("Job deleted.");

    // show the updated list, mirroring the post-delete re-fetch
    let jobs = api::list(client).await?;
    print_job_list(&jobs);
    Ok(())
}

fn print_job_list(jobs: &[Job]) {
    if jobs.is_empty() {
        println!("No jobs yet. Create one with `smarthire job create`.");
        return;
    }

    println!("{} job(s):", jobs.len());
    for job in jobs {
        let location = job.location.as_deref().unwrap_or("-");
        println!(
            "  {}  {}  [exp {}y, {} vacancies, {}]",
            job.id,
            job.title,
            job.experience_required.unwrap_or(0),
            job.vacancies.unwrap_or(0),
            location
        );
        if !job.skill_required.is_empty() {
            println!("      skills: {}", job.skill_required.join(", "));
        }
    }
}
