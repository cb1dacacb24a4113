// Common module - shared types and utilities across all modules

pub mod config;
pub mod error;
pub mod helpers;
pub mod validation;

// Re-export commonly used types for convenience
pub use config::Config;
pub use error::ClientError;
pub use helpers::{confirm, format_timestamp, safe_token_log};
pub use validation::{ValidationError, ValidationResult, Validator};
