// src/applicants/api.rs

use super::models::Applicant;
use crate::api::ApiClient;
use crate::common::ClientError;

pub async fn get_by_id(client: &ApiClient, id: &str) -> Result<Applicant, ClientError> {
    client.get(&format!("/applicant/{}", id)).await
}

/// Trigger re-verification of the applicant's socials and claimed skills;
/// returns the updated applicant record
pub async fn verify_by_id(client: &ApiClient, id: &str) -> Result<Applicant, ClientError> {
    client.post_empty(&format!("/applicant/{}", id)).await
}
