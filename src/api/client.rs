// src/api/client.rs
//
// Request plumbing shared by every endpoint group: bearer token attachment,
// `{ "data": ... }` envelope unwrapping and error body extraction.

use reqwest::multipart::Form;
use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

use crate::common::{safe_token_log, ClientError};

/// Standard response envelope: every list/detail payload arrives as
/// `{ "data": <payload> }`.
#[derive(Debug, Deserialize)]
struct Envelope<T> {
    data: T,
}

/// Error responses optionally carry `{ message }` or `{ error }` for display
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
    error: Option<String>,
}

/// Typed HTTP client for the SmartHire API.
///
/// Holds the shared reqwest client, the versioned base URL and the bearer
/// token (if a session is present). Endpoint groups in the domain modules
/// build on the generic verbs here. No automatic retry, timeout or
/// cancellation exists anywhere in the client.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(http: Client, base_url: impl Into<String>, token: Option<String>) -> Self {
        let client = Self {
            http,
            base_url: base_url.into(),
            token,
        };
        if let Some(token) = &client.token {
            debug!(token = %safe_token_log(token), "API client authenticated");
        }
        client
    }

    pub fn has_token(&self) -> bool {
        self.token.is_some()
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        let mut builder = self.http.request(method, url);
        if let Some(token) = &self.token {
            builder = builder.header("Authorization", format!("Bearer {}", token));
        }
        builder
    }

    /// GET an enveloped payload
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        let response = self.request(Method::GET, path).send().await?;
        read_envelope(path, response).await
    }

    /// POST a JSON body, expecting an enveloped payload back
    pub async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ClientError> {
        let response = self.request(Method::POST, path).json(body).send().await?;
        read_envelope(path, response).await
    }

    /// POST without a body, expecting an enveloped payload back
    pub async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        let response = self.request(Method::POST, path).send().await?;
        read_envelope(path, response).await
    }

    /// POST a JSON body and deserialize the full response, bypassing the
    /// envelope. The auth endpoints return `{ token, data }` at the top level.
    pub async fn post_unenveloped<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ClientError> {
        let response = self.request(Method::POST, path).json(body).send().await?;
        let response = check_status(path, response).await?;
        response
            .json::<T>()
            .await
            .map_err(|e| ClientError::InvalidResponse(e.to_string()))
    }

    /// PUT a JSON body, expecting an enveloped payload back
    pub async fn put<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ClientError> {
        let response = self.request(Method::PUT, path).json(body).send().await?;
        read_envelope(path, response).await
    }

    /// DELETE a resource; the response body is not interpreted
    pub async fn delete(&self, path: &str) -> Result<(), ClientError> {
        let response = self.request(Method::DELETE, path).send().await?;
        check_status(path, response).await?;
        Ok(())
    }

    /// POST a multipart form (resume upload), expecting an enveloped payload
    pub async fn post_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        form: Form,
    ) -> Result<T, ClientError> {
        let response = self
            .request(Method::POST, path)
            .multipart(form)
            .send()
            .await?;
        read_envelope(path, response).await
    }
}

/// Map a non-success response to a ClientError, extracting the server-provided
/// message when one is present
async fn check_status(path: &str, response: Response) -> Result<Response, ClientError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    let message = extract_error_message(&body)
        .unwrap_or_else(|| format!("request to {} failed with status {}", path, status));
    error!(path = %path, status = %status, message = %message, "API request failed");

    Err(match status {
        StatusCode::UNAUTHORIZED => ClientError::Unauthorized(message),
        StatusCode::NOT_FOUND => ClientError::NotFound(message),
        _ => ClientError::Api {
            status: status.as_u16(),
            message,
        },
    })
}

async fn read_envelope<T: DeserializeOwned>(
    path: &str,
    response: Response,
) -> Result<T, ClientError> {
    let response = check_status(path, response).await?;
    let envelope = response
        .json::<Envelope<T>>()
        .await
        .map_err(|e| ClientError::InvalidResponse(e.to_string()))?;
    Ok(envelope.data)
}

fn extract_error_message(body: &str) -> Option<String> {
    let parsed: ErrorBody = serde_json::from_str(body).ok()?;
    parsed.message.or(parsed.error).filter(|m| !m.is_empty())
}
