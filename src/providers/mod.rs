//! Model provider abstraction layer.
//!
//! Defines the [`ChatProvider`] trait and the shared request type used by
//! all provider implementations.
//!
//! Two providers are implemented:
//! - [`openai::OpenAiProvider`] — OpenAI `/chat/completions` API
//! - [`dashscope::DashScopeProvider`] — DashScope OpenAI-compatible mode
//!
//! The [`gateway::ModelGateway`] holds an ordered list of configured
//! providers and always calls the first one; adding a third provider is
//! a new list entry, not new branching.

use async_trait::async_trait;
use regex::Regex;

pub mod dashscope;
pub mod gateway;
pub mod openai;

// ---------------------------------------------------------------------------
// Request
// ---------------------------------------------------------------------------

/// A single-turn chat completion request.
///
/// The pipeline only ever sends one system message and one user message;
/// anything richer belongs to the provider wire format, not here.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatRequest {
    /// System persona message.
    pub system: String,
    /// The user prompt.
    pub user: String,
    /// Output token ceiling.
    pub max_tokens: u32,
    /// Sampling temperature.
    pub temperature: f64,
    /// Request strict-JSON output. Honored only by providers whose API
    /// supports it; compatibility endpoints ignore it.
    pub json_mode: bool,
    /// Use a specific model instead of the provider's configured default.
    /// Ignored by providers that pin their model.
    pub model_override: Option<String>,
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Errors returned by the model gateway and its providers.
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    /// No provider has a usable credential. Expected in demo mode;
    /// reported before any network call is attempted.
    #[error("no model provider is configured")]
    Unavailable,
    /// The provider rejected our credentials.
    #[error("provider rejected credentials: {0}")]
    Auth(String),
    /// HTTP transport failure.
    #[error("provider request failed: {0}")]
    Transport(#[from] reqwest::Error),
    /// Upstream provider responded with a non-auth error status.
    #[error("provider returned non-success status {status}: {body}")]
    HttpStatus {
        /// HTTP status code.
        status: u16,
        /// Sanitized response body.
        body: String,
    },
    /// The call exceeded the configured time budget.
    #[error("model call timed out after {0}s")]
    Timeout(u64),
    /// Response did not match the expected wire schema.
    #[error("provider response parse error: {0}")]
    Parse(String),
}

impl GatewayError {
    /// Whether this failure is a credential rejection. Auth failures are
    /// never retried.
    pub fn is_auth(&self) -> bool {
        matches!(self, Self::Auth(_))
    }
}

// ---------------------------------------------------------------------------
// HTTP helpers (shared by all providers)
// ---------------------------------------------------------------------------

/// Check HTTP response status and return body text or a structured error.
///
/// # Errors
///
/// Returns `GatewayError::Transport` on transport failure,
/// `GatewayError::Auth` on 401/403, `GatewayError::HttpStatus` on any
/// other non-2xx.
pub async fn check_http_response(response: reqwest::Response) -> Result<String, GatewayError> {
    let status = response.status();
    let body = response.text().await?;
    if status.as_u16() == 401 || status.as_u16() == 403 {
        return Err(GatewayError::Auth(sanitize_http_error_body(&body)));
    }
    if !status.is_success() {
        return Err(GatewayError::HttpStatus {
            status: status.as_u16(),
            body: sanitize_http_error_body(&body),
        });
    }
    Ok(body)
}

fn sanitize_http_error_body(raw: &str) -> String {
    let collapsed = raw.split_whitespace().collect::<Vec<_>>().join(" ");

    let mut sanitized = collapsed;
    if let Ok(regex) = Regex::new(r"sk-[A-Za-z0-9_\-]{16,}") {
        sanitized = regex.replace_all(&sanitized, "[REDACTED]").into_owned();
    }

    const MAX_ERROR_BODY_CHARS: usize = 256;
    if sanitized.chars().count() > MAX_ERROR_BODY_CHARS {
        let shortened = sanitized
            .chars()
            .take(MAX_ERROR_BODY_CHARS)
            .collect::<String>();
        return format!("{shortened}...[truncated]");
    }

    sanitized
}

// ---------------------------------------------------------------------------
// Trait
// ---------------------------------------------------------------------------

/// A chat-completion provider strategy.
///
/// Implementations must be `Send + Sync`; the gateway shares them across
/// concurrent in-flight generation calls.
#[async_trait]
pub trait ChatProvider: Send + Sync {
    /// Send the prompt, return the model's raw text.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError`] on transport, auth, or wire-format failure.
    async fn complete(&self, request: &ChatRequest) -> Result<String, GatewayError>;

    /// Short provider label for logging.
    fn name(&self) -> &'static str;

    /// The default chat model this provider is configured for.
    fn model(&self) -> &str;
}
