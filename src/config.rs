// src/config.rs
use std::env;

use thiserror::Error;

/// Default Gemini API base URL.
const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";
const DEFAULT_MODEL: &str = "gemini-1.0-pro";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("⚠️ GOOGLE_API_KEY not found. Set it in environment variables.")]
    MissingApiKey,
    #[error("invalid PORT value {value:?}: {source}")]
    InvalidPort {
        value: String,
        source: std::num::ParseIntError,
    },
}

/// Process-wide configuration, read once at startup and immutable afterwards.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub api_key: String,
    pub model: String,
    pub api_base: String,
    pub host: String,
    pub port: u16,
}

impl AppConfig {
    /// Load configuration from the environment. A missing or empty
    /// `GOOGLE_API_KEY` is fatal: the process must not start serving.
    pub fn load() -> Result<Self, ConfigError> {
        let api_key = env::var("GOOGLE_API_KEY")
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or(ConfigError::MissingApiKey)?;

        let model = env::var("GEMINI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());
        let api_base = env::var("GEMINI_API_BASE").unwrap_or_else(|_| DEFAULT_API_BASE.to_string());
        let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = match env::var("PORT") {
            Ok(value) => value
                .parse()
                .map_err(|source| ConfigError::InvalidPort { value, source })?,
            Err(_) => 3000,
        };

        Ok(Self {
            api_key,
            model,
            api_base,
            host,
            port,
        })
    }
}
