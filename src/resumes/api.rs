// src/resumes/api.rs

use std::path::Path;

use reqwest::multipart::{Form, Part};

use super::models::Resume;
use crate::api::ApiClient;
use crate::common::ClientError;

/// Upload one resume file into a folder (multipart field `file`)
pub async fn upload(
    client: &ApiClient,
    folder_id: &str,
    path: &Path,
) -> Result<Resume, ClientError> {
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "resume.pdf".to_string());

    let bytes = tokio::fs::read(path).await?;
    let part = Part::bytes(bytes)
        .file_name(file_name)
        .mime_str(mime_for(path))?;
    let form = Form::new().part("file", part);

    client
        .post_multipart(&format!("/resume/upload/{}", folder_id), form)
        .await
}

pub async fn delete(client: &ApiClient, id: &str) -> Result<(), ClientError> {
    client.delete(&format!("/resume/{}", id)).await
}

fn mime_for(path: &Path) -> &'static str {
    match path.extension().and_then(|e| e.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("pdf") => "application/pdf",
        _ => "application/octet-stream",
    }
}
