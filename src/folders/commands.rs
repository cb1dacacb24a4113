// src/folders/commands.rs

use tracing::info;

use super::api;
use super::models::*;
use super::validators::FolderValidator;
use crate::api::ApiClient;
use crate::common::{confirm, format_timestamp, ClientError, Validator};

pub async fn create(client: &ApiClient, title: String) -> Result<(), ClientError> {
    let req = CreateFolder { title };
    FolderValidator.validate(&req).into_result()?;

    let folder = api::create(client, &req).await?;
    info!(folder_id = %folder.id, "folder created");
    println!("Folder created: {} ({})", folder.title, folder.id);
    Ok(())
}

pub async fn list(client: &ApiClient) -> Result<(), ClientError> {
    let folders = api::list(client).await?;
    print_folder_list(&folders);
    Ok(())
}

pub async fn show(client: &ApiClient, id: &str) -> Result<(), ClientError> {
    let folder = api::get_by_id(client, id).await?;
    println!("Folder: {} ({})", folder.title, folder.id);
    if let Some(created) = &folder.created_at {
        println!("Created: {}", format_timestamp(created));
    }
    println!(
        "{} resume(s), {} processed",
        folder.total_count(),
        folder.processed_count()
    );

    for resume in &folder.total_files {
        let id = resume.id.as_deref().unwrap_or("-");
        let name = resume.display_name();
        let status = resume.status.as_deref().unwrap_or("unknown");
        println!("  {}  {}  [{}]", id, name, status);
        if let Some(url) = &resume.url {
            println!("      {}", url);
        }
    }
    Ok(())
}

pub async fn rename(client: &ApiClient, id: &str, title: String) -> Result<(), ClientError> {
    let req = UpdateFolder { title };
    FolderValidator.validate(&req).into_result()?;

    let folder = api::update(client, id, &req).await?;
    println!("Folder renamed: {} ({})", folder.title, folder.id);
    Ok(())
}

pub async fn delete(client: &ApiClient, id: &str, assume_yes: bool) -> Result<(), ClientError> {
    if !confirm(
        &format!("Are you sure you want to delete folder {}?", id),
        assume_yes,
    )? {
        println!("Aborted; folder not deleted.");
        return Ok(());
    }

    api::delete(client, id).await?;
    println!("Folder deleted.");

    let folders = api::list(client).await?;
    print_folder_list(&folders);
    Ok(())
}

fn print_folder_list(folders: &[Folder]) {
    if folders.is_empty() {
        println!("No folders yet. Create one with `smarthire folder create`.");
        return;
    }

    println!("{} folder(s):", folders.len());
    for folder in folders {
        let created = folder
            .created_at
            .as_deref()
            .map(format_timestamp)
            .unwrap_or_else(|| "-".to_string());
        println!(
            "  {}  {}  [{} resumes, {} processed, created {}]",
            folder.id,
            folder.title,
            folder.total_count(),
            folder.processed_count(),
            created
        );
    }
}
