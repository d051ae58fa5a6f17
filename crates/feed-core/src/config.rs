//! Feed Configuration
//!
//! Runtime knobs with sensible defaults. The page size and the login
//! credentials are compile-time constants and deliberately not here.

use serde::{Deserialize, Serialize};

/// Number of posts per feed and search page
pub const PAGE_SIZE: u32 = 10;

pub const DEFAULT_API_BASE_URL: &str = "https://dummyjson.com";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedConfig {
    /// Base URL of the remote content service, without trailing slash
    pub api_base_url: String,
    /// Simulated network latency of the login check
    pub login_latency_ms: u64,
    /// How many recent posts are sampled to rank popular tags
    pub tag_sample_size: u32,
    /// How many popular tags are offered as filters
    pub popular_tag_count: usize,
    /// Local storage key of the session token
    pub token_key: String,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            login_latency_ms: 1000,
            tag_sample_size: 100,
            popular_tag_count: 10,
            token_key: "token".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    Parse(String),
    Invalid(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Parse(msg) => write!(f, "Config parse error: {}", msg),
            ConfigError::Invalid(msg) => write!(f, "Invalid config: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}

impl FeedConfig {
    /// Parse a JSON config, filling missing fields with defaults
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let mut config: FeedConfig =
            serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.api_base_url = config.api_base_url.trim_end_matches('/').to_string();
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.api_base_url.is_empty() {
            return Err(ConfigError::Invalid("api_base_url is empty".into()));
        }
        if self.token_key.is_empty() {
            return Err(ConfigError::Invalid("token_key is empty".into()));
        }
        Ok(())
    }

    pub fn login_latency(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.login_latency_ms)
    }
}
