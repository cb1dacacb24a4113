// src/jobs/api.rs

use super::models::*;
use crate::api::ApiClient;
use crate::common::ClientError;

pub async fn create(client: &ApiClient, req: &CreateJob) -> Result<Job, ClientError> {
    client.post("/job", req).await
}

pub async fn list(client: &ApiClient) -> Result<Vec<Job>, ClientError> {
    client.get("/job").await
}

pub async fn update(client: &ApiClient, id: &str, req: &UpdateJob) -> Result<Job, ClientError> {
    client.put(&format!("/job/{}", id), req).await
}

pub async fn delete(client: &ApiClient, id: &str) -> Result<(), ClientError> {
    client.delete(&format!("/job/{}", id)).await
}
