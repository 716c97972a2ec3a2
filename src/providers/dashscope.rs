//! DashScope provider via the OpenAI-compatible endpoint.
//!
//! DashScope (阿里云百炼) speaks the chat-completions dialect, so the wire
//! builders are shared with the OpenAI provider. Two differences: the
//! compatibility mode may not honor `response_format`, so strict-JSON
//! mode is never requested, and the model is pinned to the configured
//! free-tier chat model regardless of any per-request override.

use crate::config::ProviderEndpoint;

use super::openai::{build_request, parse_response};
use super::{check_http_response, ChatProvider, ChatRequest, GatewayError};

/// DashScope compatible-mode provider — the secondary strategy.
#[derive(Debug, Clone)]
pub struct DashScopeProvider {
    base_url: String,
    model: String,
    api_key: String,
    client: reqwest::Client,
}

impl DashScopeProvider {
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
impl ChatProvider for DashScopeProvider {
    async fn complete(&self, request: &ChatRequest) -> Result<String, GatewayError> {
        // Pin the model: overrides target primary-provider models.
        let pinned = ChatRequest {
            model_override: None,
            ..request.clone()
        };
        let api_request = build_request(&self.model, &pinned, false);

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
        "dashscope"
    }

    fn model(&self) -> &str {
        &self.model
    }
}
