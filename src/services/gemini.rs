// src/services/gemini.rs
use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::AppConfig;

/// Returned in place of generated text when the provider answers
/// successfully but with no content.
pub const NO_RESPONSE: &str = "⚠️ No response from AI.";

#[derive(Debug, Error)]
pub enum CompletionError {
    #[error("completion request failed: {0}")]
    Network(String),
    #[error("completion provider returned {status}: {body}")]
    Api { status: StatusCode, body: String },
    #[error("malformed completion response: {0}")]
    Malformed(String),
}

/// Thin client for the Gemini `generateContent` call. One outbound request
/// per chat message, no generation parameters beyond the prompt — the
/// provider's defaults apply.
#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    api_key: String,
    model: String,
    api_base: String,
}

impl GeminiClient {
    pub fn new(config: &AppConfig) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            api_key: config.api_key.clone(),
            model: config.model.clone(),
            api_base: config.api_base.clone(),
        }
    }

    fn api_url(&self, method: &str) -> String {
        format!(
            "{}/models/{}:{}?key={}",
            self.api_base, self.model, method, self.api_key
        )
    }

    /// Submit `prompt` and return the generated text. Transport, auth and
    /// quota failures surface as `CompletionError`; the caller decides how
    /// to report them.
    pub async fn generate(&self, prompt: &str) -> Result<String, CompletionError> {
        let request = GenerateContentRequest {
            contents: vec![Content {
                role: "user",
                parts: vec![Part { text: prompt }],
            }],
        };

        tracing::debug!(
            model = %self.model,
            prompt_len = prompt.len(),
            "sending request to Gemini API"
        );

        let response = self
            .client
            .post(self.api_url("generateContent"))
            .json(&request)
            .send()
            .await
            .map_err(|e| CompletionError::Network(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(CompletionError::Api { status, body });
        }

        let api_response: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| CompletionError::Malformed(e.to_string()))?;

        Ok(first_candidate_text(api_response).unwrap_or_else(|| NO_RESPONSE.to_string()))
    }
}

fn first_candidate_text(response: GenerateContentResponse) -> Option<String> {
    response
        .candidates
        .into_iter()
        .next()
        .and_then(|candidate| candidate.content.parts.into_iter().next())
        .map(|part| part.text)
        .filter(|text| !text.is_empty())
}

// Wire format, reduced to the text-only path.

#[derive(Debug, Serialize)]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    role: &'a str,
    parts: Vec<Part<'a>>,
}

#[derive(Debug, Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: CandidateContent,
}

#[derive(Debug, Default, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<TextPart>,
}

#[derive(Debug, Deserialize)]
struct TextPart {
    #[serde(default)]
    text: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_first_candidate_text() {
        let response: GenerateContentResponse = serde_json::from_str(
            r#"{"candidates":[{"content":{"parts":[{"text":"Drink fluids."}]},"finishReason":"STOP"}]}"#,
        )
        .unwrap();
        assert_eq!(
            first_candidate_text(response).as_deref(),
            Some("Drink fluids.")
        );
    }

    #[test]
    fn empty_candidates_yield_none() {
        let response: GenerateContentResponse = serde_json::from_str(r#"{}"#).unwrap();
        assert!(first_candidate_text(response).is_none());

        let response: GenerateContentResponse =
            serde_json::from_str(r#"{"candidates":[{"finishReason":"SAFETY"}]}"#).unwrap();
        assert!(first_candidate_text(response).is_none());
    }

    #[test]
    fn empty_text_yields_none() {
        let response: GenerateContentResponse = serde_json::from_str(
            r#"{"candidates":[{"content":{"parts":[{"text":""}]}}]}"#,
        )
        .unwrap();
        assert!(first_candidate_text(response).is_none());
    }
}
