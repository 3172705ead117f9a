//! Gemini chat completion adapter.
//!
//! Talks to the `generateContent` endpoint directly with reqwest. System
//! messages become the request's `systemInstruction` and assistant turns are
//! sent with Gemini's `model` role.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;

use parley::{
    ChatMessage, CompletionOptions, CompletionResponse, DomainError, LlmProvider, MessageRole,
    TokenUsage,
};

const BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";
const API_KEY_HEADER: &str = "x-goog-api-key";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, thiserror::Error)]
pub enum GeminiError {
    #[error("Request failed: {0}")]
    RequestFailed(String),
    #[error("Parse error: {0}")]
    ParseError(String),
    #[error("API error ({status}): {message}")]
    ApiError { status: u16, message: String },
    #[error("Rate limited")]
    RateLimited,
}

impl GeminiError {
    /// Transport failure with the request URL stripped from the message
    fn transport(err: reqwest::Error) -> Self {
        GeminiError::RequestFailed(err.without_url().to_string())
    }
}

impl From<GeminiError> for DomainError {
    fn from(err: GeminiError) -> Self {
        DomainError::ExternalService(format!("gemini: {err}"))
    }
}

/// LLM provider backed by Google Gemini
#[derive(Clone)]
pub struct GeminiProvider {
    client: Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl GeminiProvider {
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Result<Self, GeminiError> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(GeminiError::transport)?;

        Ok(Self {
            client,
            api_key: api_key.into(),
            model: model.into(),
            base_url: BASE_URL.to_string(),
        })
    }

    #[cfg(test)]
    fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// The key travels in a header so it never appears in the URL
    fn endpoint(&self) -> String {
        format!("{}/{}:generateContent", self.base_url, self.model)
    }
}

#[async_trait]
impl LlmProvider for GeminiProvider {
    async fn complete(
        &self,
        messages: &[ChatMessage],
        options: &CompletionOptions,
    ) -> Result<CompletionResponse, DomainError> {
        let request = build_request(messages, options);

        let response = self
            .client
            .post(self.endpoint())
            .header(API_KEY_HEADER, &self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(GeminiError::transport)?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read error body".to_string());
            return Err(map_http_error(status, body).into());
        }

        let payload: Value = response
            .json()
            .await
            .map_err(|e| GeminiError::ParseError(e.without_url().to_string()))?;

        let content = extract_text(&payload)
            .ok_or_else(|| GeminiError::ParseError("response has no text parts".to_string()))?;

        Ok(CompletionResponse {
            content,
            model: self.model.clone(),
            usage: extract_usage(&payload),
        })
    }

    fn provider_name(&self) -> &str {
        "google"
    }

    fn model_id(&self) -> &str {
        &self.model
    }
}

// ============================================
// Request Types
// ============================================

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    system_instruction: Option<Content>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct Content {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<&'static str>,
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
struct Part {
    text: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    max_output_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
}

// ============================================
// Helper Functions
// ============================================

fn build_request(messages: &[ChatMessage], options: &CompletionOptions) -> GenerateContentRequest {
    let system: Vec<Part> = messages
        .iter()
        .filter(|m| m.role == MessageRole::System)
        .map(|m| Part {
            text: m.content.clone(),
        })
        .collect();

    let contents = messages
        .iter()
        .filter_map(|m| {
            let role = match m.role {
                MessageRole::System => return None,
                MessageRole::User => "user",
                MessageRole::Assistant => "model",
            };
            Some(Content {
                role: Some(role),
                parts: vec![Part {
                    text: m.content.clone(),
                }],
            })
        })
        .collect();

    GenerateContentRequest {
        contents,
        system_instruction: (!system.is_empty()).then_some(Content {
            role: None,
            parts: system,
        }),
        generation_config: GenerationConfig {
            max_output_tokens: options.max_tokens,
            temperature: options.temperature,
        },
    }
}

fn extract_text(root: &Value) -> Option<String> {
    let parts = root
        .get("candidates")?
        .as_array()?
        .first()?
        .get("content")?
        .get("parts")?
        .as_array()?;

    let text: String = parts
        .iter()
        .filter_map(|part| part.get("text").and_then(|t| t.as_str()))
        .collect();

    Some(text.trim().to_string())
}

fn extract_usage(root: &Value) -> TokenUsage {
    let count = |key: &str| {
        root.get("usageMetadata")
            .and_then(|u| u.get(key))
            .and_then(|v| v.as_u64())
            .unwrap_or(0) as u32
    };

    TokenUsage {
        prompt_tokens: count("promptTokenCount"),
        completion_tokens: count("candidatesTokenCount"),
        total_tokens: count("totalTokenCount"),
    }
}

fn map_http_error(status: StatusCode, body: String) -> GeminiError {
    if status == StatusCode::TOO_MANY_REQUESTS {
        return GeminiError::RateLimited;
    }

    let message = serde_json::from_str::<Value>(&body)
        .ok()
        .and_then(|v| {
            v.get("error")
                .and_then(|e| e.get("message"))
                .and_then(|m| m.as_str())
                .map(str::to_string)
        })
        .unwrap_or(body);

    GeminiError::ApiError {
        status: status.as_u16(),
        message,
    }
}
