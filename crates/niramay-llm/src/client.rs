//! The seam between the pipelines and the external text-generation service.

use std::collections::VecDeque;
use std::sync::Mutex;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Generation errors.
#[derive(Error, Debug)]
pub enum GenerationError {
    #[error("AI service request failed: {0}")]
    Request(String),

    #[error("AI service returned status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("AI service returned an empty response")]
    EmptyResponse,

    #[error("AI service is not configured: {0}")]
    NotConfigured(String),
}

pub type GenerationResult<T> = Result<T, GenerationError>;

/// Image sent inline with a prompt (already base64-encoded).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InlineImage {
    /// MIME type, e.g. "image/png"
    pub mime_type: String,
    /// Base64 payload without a data-URL prefix
    pub data: String,
}

impl InlineImage {
    pub fn new(mime_type: impl Into<String>, data: impl Into<String>) -> Self {
        Self {
            mime_type: mime_type.into(),
            data: strip_data_url(data.into()),
        }
    }
}

/// Browsers hand us `data:image/png;base64,....`; the service wants the bare payload.
fn strip_data_url(data: String) -> String {
    if data.starts_with("data:") {
        if let Some(idx) = data.find(";base64,") {
            return data[idx + ";base64,".len()..].to_string();
        }
    }
    data
}

/// One call to the AI service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationRequest {
    pub prompt: String,
    pub image: Option<InlineImage>,
    pub temperature: Option<f32>,
    pub max_output_tokens: Option<u32>,
}

impl GenerationRequest {
    /// A text-only request with service defaults.
    pub fn text(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            image: None,
            temperature: None,
            max_output_tokens: None,
        }
    }

    /// A prompt plus an inline image.
    pub fn with_image(prompt: impl Into<String>, image: InlineImage) -> Self {
        Self {
            image: Some(image),
            ..Self::text(prompt)
        }
    }

    pub fn temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    pub fn max_output_tokens(mut self, tokens: u32) -> Self {
        self.max_output_tokens = Some(tokens);
        self
    }
}

/// Anything that turns a prompt into a single text reply.
pub trait TextGenerator {
    fn generate(&self, request: &GenerationRequest) -> GenerationResult<String>;
}

impl<T: TextGenerator + ?Sized> TextGenerator for &T {
    fn generate(&self, request: &GenerationRequest) -> GenerationResult<String> {
        (**self).generate(request)
    }
}

impl<T: TextGenerator + ?Sized> TextGenerator for Box<T> {
    fn generate(&self, request: &GenerationRequest) -> GenerationResult<String> {
        (**self).generate(request)
    }
}

/// Mock generator for testing without a live AI service.
///
/// Replies are handed out in the order they were scripted. Every request is
/// recorded so tests can inspect the prompt that was sent.
#[derive(Default)]
pub struct MockGenerator {
    replies: Mutex<VecDeque<GenerationResult<String>>>,
    requests: Mutex<Vec<GenerationRequest>>,
}

impl MockGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a successful reply.
    pub fn reply(self, text: impl Into<String>) -> Self {
        self.lock_replies().push_back(Ok(text.into()));
        self
    }

    /// Queue a failure.
    pub fn fail(self, error: GenerationError) -> Self {
        self.lock_replies().push_back(Err(error));
        self
    }

    /// Requests received so far.
    pub fn requests(&self) -> Vec<GenerationRequest> {
        self.requests
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    fn lock_replies(&self) -> std::sync::MutexGuard<'_, VecDeque<GenerationResult<String>>> {
        self.replies.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl TextGenerator for MockGenerator {
    fn generate(&self, request: &GenerationRequest) -> GenerationResult<String> {
        self.requests
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(request.clone());

        self.lock_replies()
            .pop_front()
            .unwrap_or_else(|| Err(GenerationError::Request("no scripted reply left".into())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_replies_in_order() {
        let mock = MockGenerator::new().reply("first").reply("second");

        assert_eq!(mock.generate(&GenerationRequest::text("a")).unwrap(), "first");
        assert_eq!(mock.generate(&GenerationRequest::text("b")).unwrap(), "second");
        assert!(mock.generate(&GenerationRequest::text("c")).is_err());

        let prompts: Vec<String> = mock.requests().into_iter().map(|r| r.prompt).collect();
        assert_eq!(prompts, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_mock_failure() {
        let mock = MockGenerator::new().fail(GenerationError::EmptyResponse);
        let err = mock.generate(&GenerationRequest::text("x")).unwrap_err();
        assert!(matches!(err, GenerationError::EmptyResponse));
    }

    #[test]
    fn test_inline_image_strips_data_url() {
        let image = InlineImage::new("image/png", "data:image/png;base64,iVBORw0KGgo=");
        assert_eq!(image.data, "iVBORw0KGgo=");

        let bare = InlineImage::new("image/jpeg", "/9j/4AAQ");
        assert_eq!(bare.data, "/9j/4AAQ");
    }

    #[test]
    fn test_request_builder() {
        let request = GenerationRequest::with_image("read this", InlineImage::new("image/png", "AAAA"))
            .temperature(0.4)
            .max_output_tokens(2048);

        assert_eq!(request.prompt, "read this");
        assert_eq!(request.temperature, Some(0.4));
        assert_eq!(request.max_output_tokens, Some(2048));
        assert_eq!(request.image.unwrap().mime_type, "image/png");
    }
}
