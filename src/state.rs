// src/state.rs
use std::sync::Arc;

use crate::config::AppConfig;
use crate::services::gemini::GeminiClient;

pub type SharedState = Arc<AppState>;

/// Read-only after construction; requests share it without locking.
pub struct AppState {
    pub gemini: GeminiClient,
}

impl AppState {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            gemini: GeminiClient::new(config),
        }
    }
}
