// src/folders/api.rs

use super::models::*;
use crate::api::ApiClient;
use crate::common::ClientError;

pub async fn create(client: &ApiClient, req: &CreateFolder) -> Result<Folder, ClientError> {
    client.post("/folder", req).await
}

pub async fn list(client: &ApiClient) -> Result<Vec<Folder>, ClientError> {
    client.get("/folder").await
}

pub async fn get_by_id(client: &ApiClient, id: &str) -> Result<Folder, ClientError> {
    client.get(&format!("/folder/{}", id)).await
}

pub async fn update(client: &ApiClient, id: &str, req: &UpdateFolder) -> Result<Folder, ClientError> {
    client.put(&format!("/folder/{}", id), req).await
}

pub async fn delete(client: &ApiClient, id: &str) -> Result<(), ClientError> {
    client.delete(&format!("/folder/{}", id)).await
}
