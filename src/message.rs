// src/message.rs
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: String,
    #[serde(default = "default_language")]
    pub language: String,
}

impl Default for ChatRequest {
    fn default() -> Self {
        Self {
            message: String::new(),
            language: default_language(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ChatResponse {
    pub response: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdatesRequest {
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default = "default_region")]
    pub region: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct UpdatesResponse {
    pub response: String,
}

fn default_language() -> String {
    "English".to_string()
}

fn default_region() -> String {
    "India".to_string()
}
