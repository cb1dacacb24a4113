// Environment-driven client configuration

use std::env;
use std::path::PathBuf;

const DEFAULT_API_URL: &str = "http://localhost:3000/api/v1";
const DEFAULT_UPLOAD_CONCURRENCY: usize = 4;

/// Client configuration, read once at startup
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the SmartHire API (versioned base path)
    pub api_url: String,
    /// Path of the persisted session file (token + user)
    pub session_file: PathBuf,
    /// Worker width for the resume upload fan-out
    pub upload_concurrency: usize,
}

impl Config {
    pub fn from_env() -> Self {
        let api_url = env::var("SMARTHIRE_API_URL")
            .unwrap_or_else(|_| DEFAULT_API_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        let session_file = env::var("SMARTHIRE_SESSION_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| default_session_file());

        let upload_concurrency = env::var("SMARTHIRE_UPLOAD_CONCURRENCY")
            .ok()
            .and_then(|v| v.parse::<usize>().ok())
            .filter(|&n| n > 0)
            .unwrap_or(DEFAULT_UPLOAD_CONCURRENCY);

        Self {
            api_url,
            session_file,
            upload_concurrency,
        }
    }
}

fn default_session_file() -> PathBuf {
    home::home_dir()
        .map(|h| h.join(".smarthire").join("session.json"))
        .unwrap_or_else(|| PathBuf::from(".smarthire-session.json"))
}

#[cfg(test)]
mod tests {
    use super::*;

    // Single test because env vars are process-wide and tests run in parallel
    #[test]
    fn test_config_from_env() {
        std::env::remove_var("SMARTHIRE_API_URL");
        std::env::remove_var("SMARTHIRE_UPLOAD_CONCURRENCY");

        let config = Config::from_env();
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert_eq!(config.upload_concurrency, DEFAULT_UPLOAD_CONCURRENCY);

        std::env::set_var("SMARTHIRE_API_URL", "http://api.example.com/v1/");
        std::env::set_var("SMARTHIRE_UPLOAD_CONCURRENCY", "0");
        let config = Config::from_env();
        std::env::remove_var("SMARTHIRE_API_URL");
        std::env::remove_var("SMARTHIRE_UPLOAD_CONCURRENCY");

        assert_eq!(config.api_url, "http://api.example.com/v1");
        // zero width is rejected in favour of the default
        assert_eq!(config.upload_concurrency, DEFAULT_UPLOAD_CONCURRENCY);
    }
}
