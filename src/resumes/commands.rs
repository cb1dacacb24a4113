// src/resumes/commands.rs

use std::path::PathBuf;

use futures::stream::{self, StreamExt};
use tracing::{info, warn};

use super::api;
use super::models::{summarize, UploadOutcome};
use crate::api::ApiClient;
use crate::common::{confirm, ClientError};

/// Upload a batch of resume files into a folder.
///
/// Each file is an independent task; tasks run over a bounded worker set and
/// one failure never aborts the rest. Outcomes may complete in any order, so
/// every success/failure line is attributed to its own file name.
pub async fn upload(
    client: &ApiClient,
    folder_id: &str,
    files: Vec<PathBuf>,
    concurrency: usize,
) -> Result<(), ClientError> {
    if files.is_empty() {
        return Err(ClientError::Validation(
            "files: select at least one file to upload".to_string(),
        ));
    }

    let outcomes: Vec<UploadOutcome> = stream::iter(files)
        .map(|path| async move {
            let file = path.display().to_string();
            let result = api::upload(client, folder_id, &path).await;
            UploadOutcome { file, result }
        })
        .buffer_unordered(concurrency.max(1))
        .collect()
        .await;

    for outcome in &outcomes {
        match &outcome.result {
            Ok(resume) => {
                info!(file = %outcome.file, "resume uploaded");
                println!(
                    "Uploaded {} ({})",
                    outcome.file,
                    resume.id.as_deref().unwrap_or("no id")
                );
            }
            Err(e) => {
                warn!(file = %outcome.file, error = %e, "resume upload failed");
                println!("Failed to upload {}: {}", outcome.file, e);
            }
        }
    }

    let (succeeded, failed) = summarize(&outcomes);
    println!("Upload finished: {} succeeded, {} failed.", succeeded, failed);
    Ok(())
}

pub async fn delete(client: &ApiClient, id: &str, assume_yes: bool) -> Result<(), ClientError> {
    if !confirm(
        &format!("Are you sure you want to delete resume {}?", id),
        assume_yes,
    )? {
        println!("Aborted; resume not deleted.");
        return Ok(());
    }

    api::delete(client, id).await?;
    println!("Resume deleted.");
    Ok(())
}
