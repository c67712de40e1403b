//! Google Gemini client.
//!
//! Thin blocking wrapper around the `generateContent` endpoint. One request,
//! one text reply; no retries.

use std::time::Duration;

use reqwest::header::{HeaderValue, CONTENT_TYPE};
use serde::Deserialize;
use tracing::{debug, info};

use crate::client::{GenerationError, GenerationRequest, GenerationResult, TextGenerator};

pub const GEMINI_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta/models";
pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Error bodies are cut to this many bytes before they reach logs or callers.
const MAX_ERROR_BODY: usize = 200;

pub struct GeminiClient {
    client: reqwest::blocking::Client,
    api_key: String,
    model: String,
    endpoint: String,
}

// -- Response types --

#[derive(Debug, Deserialize)]
pub struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<GeminiCandidate>,
}

#[derive(Debug, Deserialize)]
struct GeminiCandidate {
    content: Option<GeminiResponseContent>,
}

#[derive(Debug, Deserialize)]
struct GeminiResponseContent {
    #[serde(default)]
    parts: Vec<GeminiResponsePart>,
}

#[derive(Debug, Deserialize)]
struct GeminiResponsePart {
    text: Option<String>,
}

impl GeminiClient {
    pub fn new(api_key: &str) -> GenerationResult<Self> {
        Self::with_options(api_key, DEFAULT_MODEL, GEMINI_ENDPOINT, DEFAULT_TIMEOUT)
    }

    pub fn with_options(
        api_key: &str,
        model: &str,
        endpoint: &str,
        timeout: Duration,
    ) -> GenerationResult<Self> {
        if api_key.trim().is_empty() {
            return Err(GenerationError::NotConfigured(
                "Gemini API key is required".into(),
            ));
        }

        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| GenerationError::Request(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            api_key: api_key.to_string(),
            model: model.to_string(),
            endpoint: endpoint.trim_end_matches('/').to_string(),
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn build_request_body(request: &GenerationRequest) -> serde_json::Value {
        let mut parts = vec![serde_json::json!({ "text": request.prompt })];
        if let Some(image) = &request.image {
            parts.push(serde_json::json!({
                "inlineData": {
                    "mimeType": image.mime_type,
                    "data": image.data,
                }
            }));
        }

        let mut body = serde_json::json!({
            "contents": [{
                "role": "user",
                "parts": parts,
            }]
        });

        let mut config = serde_json::Map::new();
        if let Some(temperature) = request.temperature {
            config.insert("temperature".into(), serde_json::json!(temperature));
        }
        if let Some(tokens) = request.max_output_tokens {
            config.insert("maxOutputTokens".into(), serde_json::json!(tokens));
        }
        if !config.is_empty() {
            body["generationConfig"] = serde_json::Value::Object(config);
        }

        body
    }

    /// Text of the first part of the first candidate, if any.
    pub fn extract_text(response: &GeminiResponse) -> Option<String> {
        response
            .candidates
            .first()
            .and_then(|c| c.content.as_ref())
            .and_then(|content| content.parts.iter().find_map(|p| p.text.clone()))
    }
}

impl TextGenerator for GeminiClient {
    fn generate(&self, request: &GenerationRequest) -> GenerationResult<String> {
        let url = format!("{}/{}:generateContent", self.endpoint, self.model);
        let body = Self::build_request_body(request);

        info!(
            model = %self.model,
            prompt_chars = request.prompt.len(),
            with_image = request.image.is_some(),
            "Gemini generateContent"
        );

        let api_key = HeaderValue::from_str(&self.api_key)
            .map_err(|e| GenerationError::NotConfigured(format!("Invalid API key header: {}", e)))?;

        let response = self
            .client
            .post(&url)
            .header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
            .header("x-goog-api-key", api_key)
            .json(&body)
            .send()
            .map_err(|e| GenerationError::Request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response.text().unwrap_or_default();
            return Err(GenerationError::Status {
                status: status.as_u16(),
                body: truncate(&error_body, MAX_ERROR_BODY).to_string(),
            });
        }

        let gemini_response: GeminiResponse = response
            .json()
            .map_err(|e| GenerationError::Request(format!("Failed to parse Gemini response: {}", e)))?;

        let text = Self::extract_text(&gemini_response).unwrap_or_default();
        if text.trim().is_empty() {
            return Err(GenerationError::EmptyResponse);
        }

        debug!(reply_chars = text.len(), "Gemini reply received");
        Ok(text)
    }
}

fn truncate(s: &str, max: usize) -> &str {
    if s.len() <= max {
        return s;
    }
    let mut end = max;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}
