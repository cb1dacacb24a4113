// Error handling types for the client

use super::validation::ValidationResult;

/// Client error types
///
/// Validation errors are raised before any network call is made; everything
/// else maps a failed request or a broken response. No variant is fatal to
/// the process - every command surfaces the error and returns the session to
/// its prior state.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Request failed (HTTP {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Session store error: {0}")]
    Session(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Helper to convert a failed ValidationResult into a ClientError
impl From<ValidationResult> for ClientError {
    fn from(result: ValidationResult) -> Self {
        if result.is_valid {
            ClientError::Validation("validation result was valid but converted to error".to_string())
        } else {
            let error_messages: Vec<String> = result
                .errors
                .iter()
                .map(|e| format!("{}: {}", e.field, e.message))
                .collect();
            ClientError::Validation(error_messages.join(", "))
        }
    }
}
