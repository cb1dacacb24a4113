//! Authentication data models

use serde::{Deserialize, Serialize};

/// Recruiter account profile.
///
/// The backend owns this shape; every field beyond the id is optional and
/// passed through untouched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id", default)]
    pub id: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(rename = "createdAt", default)]
    pub created_at: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Top-level auth response: `{ token, data: <user> }`, not enveloped like the
/// rest of the API
#[derive(Debug, Deserialize)]
pub struct AuthResponse {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub data: Option<User>,
}
