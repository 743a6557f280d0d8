//! Gemini backend implementation
//!
//! HTTP client for the Google generative-language API (`generateContent`).
//! The API key is resolved from the environment on every call so a key set
//! or rotated after startup is picked up without a restart.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};

use super::NudgeBackend;

/// Default public endpoint for the generative-language API
const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Default model identifier
const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Request timeout; the upstream has no SLA and a hung call must not hang
/// the request forever
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Environment variable holding the API key
const API_KEY_VAR: &str = "GEMINI_API_KEY";

/// Gemini generateContent backend
#[derive(Clone)]
pub struct GeminiBackend {
    http_client: Client,
    base_url: String,
    model: String,
}

impl GeminiBackend {
    /// Create a backend against a specific host and model
    pub fn new(base_url: &str, model: &str) -> Self {
        Self {
            http_client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            model: model.to_string(),
        }
    }

    /// Create from environment variables
    ///
    /// `GEMINI_MODEL` and `GEMINI_HOST` are optional; the API key is not
    /// read here but on each call.
    pub fn from_env() -> Self {
        let host = std::env::var("GEMINI_HOST").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let model = std::env::var("GEMINI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());
        Self::new(&host, &model)
    }

    /// Model identifier sent to the service
    pub fn model(&self) -> &str {
        &self.model
    }

    fn api_key() -> Result<String> {
        std::env::var(API_KEY_VAR)
            .ok()
            .filter(|k| !k.trim().is_empty())
            .ok_or(Error::MissingApiKey)
    }
}

/// Request to the generateContent API
#[derive(Debug, Serialize)]
struct GenerateRequest {
    contents: Vec<Content>,
}

#[derive(Debug, Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
struct Part {
    text: String,
}

/// Response from the generateContent API
#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

/// Extract the generated text from a response body
///
/// Joins the text parts of the first candidate. An empty or text-free
/// response is an error, not an empty message.
fn extract_text(response: GenerateResponse) -> Result<String> {
    let text = response
        .candidates
        .into_iter()
        .next()
        .and_then(|c| c.content)
        .map(|content| {
            content
                .parts
                .into_iter()
                .filter_map(|p| p.text)
                .collect::<Vec<_>>()
                .join("")
        })
        .unwrap_or_default();

    if text.is_empty() {
        return Err(Error::InvalidData(
            "response contained no generated text".to_string(),
        ));
    }
    Ok(text)
}

#[async_trait]
impl NudgeBackend for GeminiBackend {
    async fn generate(&self, prompt: &str) -> Result<String> {
        let key = Self::api_key()?;

        let request = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
        };

        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        );

        let response = self
            .http_client
            .post(&url)
            .header("x-goog-api-key", key)
            .timeout(REQUEST_TIMEOUT)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Api(format!("{}: {}", status, body)));
        }

        let body: GenerateResponse = response.json().await?;
        let text = extract_text(body)?;
        debug!(model = %self.model, chars = text.len(), "Gemini response");

        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_text_from_first_candidate() {
        let body: GenerateResponse = serde_json::from_str(
            r#"{"candidates":[{"content":{"parts":[{"text":"Hold off"},{"text":" on delivery!"}]}}]}"#,
        )
        .unwrap();
        assert_eq!(extract_text(body).unwrap(), "Hold off on delivery!");
    }

    #[test]
    fn empty_candidates_is_an_error() {
        let body: GenerateResponse = serde_json::from_str(r#"{"candidates":[]}"#).unwrap();
        assert!(matches!(extract_text(body), Err(Error::InvalidData(_))));
    }

    #[test]
    fn candidate_without_text_is_an_error() {
        let body: GenerateResponse =
            serde_json::from_str(r#"{"candidates":[{"content":{"parts":[]}}]}"#).unwrap();
        assert!(matches!(extract_text(body), Err(Error::InvalidData(_))));
    }

    #[test]
    fn request_serializes_to_generate_content_shape() {
        let request = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: "hello".to_string(),
                }],
            }],
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["contents"][0]["parts"][0]["text"], "hello");
    }

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let backend = GeminiBackend::new("http://localhost:9999/", "gemini-2.5-flash");
        assert_eq!(backend.base_url, "http://localhost:9999");
    }
}
