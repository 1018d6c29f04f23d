//! Remote API configuration parsing from environment variables.

use std::env;
use std::time::Duration;

/// Public model service the original deployment talks to
pub const DEFAULT_BASE_URL: &str = "https://exoapi-with-ai-model.onrender.com";

const DEFAULT_TIMEOUT_SECS: u64 = 10;
const DEFAULT_RETRY_ATTEMPTS: u32 = 3;

/// Remote API environment configuration
#[derive(Debug, Clone)]
pub struct ApiEnvConfig {
    pub base_url: String,
    /// Per-request timeout
    pub timeout: Duration,
    /// Transient-failure retry budget applied by the HTTP middleware
    pub retry_attempts: u32,
}

impl Default for ApiEnvConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            retry_attempts: DEFAULT_RETRY_ATTEMPTS,
        }
    }
}

impl ApiEnvConfig {
    pub fn from_env() -> Self {
        Self {
            base_url: env::var("EXO_API_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),
            timeout: Duration::from_secs(
                env::var("EXO_API_TIMEOUT_SECS")
                    .unwrap_or_else(|_| DEFAULT_TIMEOUT_SECS.to_string())
                    .parse::<u64>()
                    .unwrap_or(DEFAULT_TIMEOUT_SECS),
            ),
            retry_attempts: env::var("EXO_API_RETRY_ATTEMPTS")
                .unwrap_or_else(|_| DEFAULT_RETRY_ATTEMPTS.to_string())
                .parse::<u32>()
                .unwrap_or(DEFAULT_RETRY_ATTEMPTS),
        }
    }
}
