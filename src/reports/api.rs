// src/reports/api.rs

use super::models::*;
use crate::api::ApiClient;
use crate::common::ClientError;

pub async fn create(client: &ApiClient, req: &CreateReport) -> Result<Report, ClientError> {
    client.post("/report", req).await
}

pub async fn list(client: &ApiClient) -> Result<Vec<Report>, ClientError> {
    client.get("/report").await
}

pub async fn get_by_id(client: &ApiClient, id: &str) -> Result<Report, ClientError> {
    client.get(&format!("/report/{}", id)).await
}

pub async fn delete(client: &ApiClient, id: &str) -> Result<(), ClientError> {
    client.delete(&format!("/report/{}", id)).await
}
