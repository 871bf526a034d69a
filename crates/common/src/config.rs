use crate::error::KeyfactsError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Keyfacts application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Upstream chat-completions API base URL
    pub api_base_url: String,

    /// Bearer token for the upstream API
    pub api_key: String,

    /// Model name sent with every request
    pub llm_model: String,

    /// Server bind address
    pub server_host: String,

    /// Server port
    pub server_port: u16,

    /// Log directory
    pub log_dir: PathBuf,

    /// Log level
    pub log_level: String,

    /// Lower bound of the per-request point count
    pub points_min: usize,

    /// Upper bound of the per-request point count
    pub points_max: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: "https://api.perplexity.ai".to_string(),
            api_key: String::new(),
            llm_model: "sonar".to_string(),
            server_host: "0.0.0.0".to_string(),
            server_port: 8000,
            log_dir: PathBuf::from("./log"),
            log_level: "info".to_string(),
            points_min: 4,
            points_max: 8,
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables and .env file
    pub fn from_env() -> Result<Self, KeyfactsError> {
        // Load .env file (ignore if not exists)
        let _ = dotenv::dotenv();

        let config = Self {
            api_base_url: std::env::var("PERPLEXITY_BASE_URL")
                .unwrap_or_else(|_| "https://api.perplexity.ai".to_string()),
            api_key: std::env::var("PERPLEXITY_API_KEY").unwrap_or_default(),
            llm_model: std::env::var("LLM_MODEL")
                .unwrap_or_else(|_| "sonar".to_string()),
            server_host: std::env::var("SERVER_HOST")
                .unwrap_or_else(|_| "0.0.0.0".to_string()),
            server_port: std::env::var("SERVER_PORT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(8000),
            log_dir: std::env::var("LOG_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("./log")),
            log_level: std::env::var("LOG_LEVEL")
                .unwrap_or_else(|_| "info".to_string()),
            points_min: std::env::var("POINTS_MIN")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(4),
            points_max: std::env::var("POINTS_MAX")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(8),
        };

        config.validate()?;
        config.ensure_directories()?;

        Ok(config)
    }

    /// Ensure required directories exist, create if not
    pub fn ensure_directories(&self) -> Result<(), KeyfactsError> {
        if !self.log_dir.exists() {
            std::fs::create_dir_all(&self.log_dir).map_err(|e| {
                KeyfactsError::config(format!(
                    "Failed to create log directory {}: {}",
                    self.log_dir.display(),
                    e
                ))
            })?;
        }

        Ok(())
    }

    /// Get server bind address (host:port)
    pub fn server_bind_address(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), KeyfactsError> {
        // Validate upstream API URL
        if !self.api_base_url.starts_with("http://")
            && !self.api_base_url.starts_with("https://") {
            return Err(KeyfactsError::config(
                "API base URL must start with http:// or https://"
            ));
        }

        // Validate port range
        if self.server_port == 0 {
            return Err(KeyfactsError::config("Server port cannot be 0"));
        }

        // Validate point count range
        if self.points_min == 0 {
            return Err(KeyfactsError::config("POINTS_MIN must be at least 1"));
        }
        if self.points_min > self.points_max {
            return Err(KeyfactsError::config(
                "POINTS_MIN cannot be greater than POINTS_MAX"
            ));
        }

        Ok(())
    }
}
