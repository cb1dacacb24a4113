// src/auth/api.rs

use super::models::{AuthResponse, Credentials};
use crate::api::ApiClient;
use crate::common::ClientError;

pub async fn register(client: &ApiClient, creds: &Credentials) -> Result<AuthResponse, ClientError> {
    client.post_unenveloped("/auth/signup", creds).await
}

pub async fn login(client: &ApiClient, creds: &Credentials) -> Result<AuthResponse, ClientError> {
    client.post_unenveloped("/auth/login", creds).await
}
