// src/projects/commands.rs

use super::api;
use crate::api::ApiClient;
use crate::common::ClientError;

pub async fn analyse(client: &ApiClient, url: &str) -> Result<(), ClientError> {
    if url.trim().is_empty() {
        return Err(ClientError::Validation(
            "url: a project URL is required".to_string(),
        ));
    }

    println!("Analyzing {}...", url);
    let analysis = api::analyse(client, url).await?;
    println!("{}", analysis.summary());
    Ok(())
}
