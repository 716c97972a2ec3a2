//! OpenAI provider implementation using the `/chat/completions` API.
//!
//! The wire types here double as the dialect for any OpenAI-compatible
//! endpoint; the DashScope provider reuses the builders with strict-JSON
//! mode disabled.

use serde::{Deserialize, Serialize};

use crate::config::ProviderEndpoint;

use super::{check_http_response, ChatProvider, ChatRequest, GatewayError};

// ---------------------------------------------------------------------------
// Wire types (pub for integration testing)
// ---------------------------------------------------------------------------

/// Chat completions API request body.
#[doc(hidden)]
#[derive(Debug, Serialize)]
pub struct ChatCompletionRequest {
    /// Model identifier.
    pub model: String,
    /// System + user messages.
    pub messages: Vec<ChatCompletionMessage>,
    /// Sampling temperature.
    pub temperature: f64,
    /// Maximum completion tokens.
    pub max_tokens: u32,
    /// Strict-JSON response mode, when requested and supported.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_format: Option<ResponseFormat>,
}

/// A message in chat completions format.
#[doc(hidden)]
#[derive(Debug, Serialize)]
pub struct ChatCompletionMessage {
    /// Role: `system` or `user`.
    pub role: String,
    /// Plain text content.
    pub content: String,
}

/// The `response_format` request field.
#[doc(hidden)]
#[derive(Debug, Serialize)]
pub struct ResponseFormat {
    /// Format kind, always `json_object`.
    #[serde(rename = "type")]
    pub kind: String,
}

/// Chat completions API response body.
#[doc(hidden)]
#[derive(Debug, Deserialize)]
pub struct ChatCompletionResponse {
    /// Response choices.
    pub choices: Vec<ChatCompletionChoice>,
}

/// A response choice.
#[doc(hidden)]
#[derive(Debug, Deserialize)]
pub struct ChatCompletionChoice {
    /// Assistant message for this choice.
    pub message: ChatCompletionResponseMessage,
}

/// Assistant message in a response choice.
#[doc(hidden)]
#[derive(Debug, Deserialize)]
pub struct ChatCompletionResponseMessage {
    /// Text content. May be absent on refusals.
    pub content: Option<String>,
}

// ---------------------------------------------------------------------------
// Request / Response builders (pub for integration testing)
// ---------------------------------------------------------------------------

/// Build a chat completions request body.
///
/// `honor_json_mode` gates the `response_format` field: the OpenAI API
/// supports it, compatibility endpoints may not.
#[doc(hidden)]
pub fn build_request(
    default_model: &str,
    request: &ChatRequest,
    honor_json_mode: bool,
) -> ChatCompletionRequest {
    let model = request
        .model_override
        .clone()
        .unwrap_or_else(|| default_model.to_owned());

    let response_format = if honor_json_mode && request.json_mode {
        Some(ResponseFormat {
            kind: "json_object".to_owned(),
        })
    } else {
        None
    };

    ChatCompletionRequest {
        model,
        messages: vec![
            ChatCompletionMessage {
                role: "system".to_owned(),
                content: request.system.clone(),
            },
            ChatCompletionMessage {
                role: "user".to_owned(),
                content: request.user.clone(),
            },
        ],
        temperature: request.temperature,
        max_tokens: request.max_tokens,
        response_format,
    }
}

/// Parse a chat completions response body into the assistant's text.
///
/// # Errors
///
/// Returns `GatewayError::Parse` when the body cannot be deserialized or
/// contains no assistant text.
#[doc(hidden)]
pub fn parse_response(body: &str) -> Result<String, GatewayError> {
    let resp: ChatCompletionResponse =
        serde_json::from_str(body).map_err(|e| GatewayError::Parse(e.to_string()))?;

    resp.choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .filter(|text| !text.is_empty())
        .ok_or_else(|| GatewayError::Parse("empty assistant message".to_owned()))
}

// ---------------------------------------------------------------------------
// Provider
// ---------------------------------------------------------------------------

/// OpenAI chat completions provider — the primary strategy.
#[derive(Debug, Clone)]
pub struct OpenAiProvider {
    base_url: String,
    model: String,
    api_key: String,
    client: reqwest::Client,
}

impl OpenAiProvider {
    /// Create a provider for the given endpoint and key.
    pub fn new(endpoint: &ProviderEndpoint, api_key: String) -> Self {
        Self {
            base_url: endpoint.base_url.trim_end_matches('/').to_owned(),
            model: endpoint.model.clone(),
            api_key,
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait::async_trait]
impl ChatProvider for OpenAiProvider {
    async fn complete(&self, request: &ChatRequest) -> Result<String, GatewayError> {
        let api_request = build_request(&self.model, request, true);

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .header("content-type", "application/json")
            .header("authorization", format!("Bearer {}", self.api_key))
            .json(&api_request)
            .send()
            .await?;

        let payload = check_http_response(response).await?;
        parse_response(&payload)
    }

    fn name(&self) -> &'static str {
        "openai"
    }

    fn model(&self) -> &str {
        &self.model
    }
}
