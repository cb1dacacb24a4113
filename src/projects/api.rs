// src/projects/api.rs

use super::models::{AnalyseRequest, ProjectAnalysis};
use crate::api::ApiClient;
use crate::common::ClientError;

pub async fn analyse(client: &ApiClient, url: &str) -> Result<ProjectAnalysis, ClientError> {
    let req = AnalyseRequest {
        url: url.to_string(),
    };
    client.post("/applicant/project/analyse", &req).await
}
