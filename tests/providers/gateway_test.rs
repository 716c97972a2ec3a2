//! Gateway strategy selection and call behavior.

use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use wayfarer::config::GatewayConfig;
use wayfarer::credentials::Credentials;
use wayfarer::providers::gateway::ModelGateway;
use wayfarer::providers::{ChatProvider, ChatRequest, GatewayError};

fn credentials(pairs: &[(&str, &str)]) -> Credentials {
    let mut vars = BTreeMap::new();
    for (key, value) in pairs {
        vars.insert((*key).to_owned(), (*value).to_owned());
    }
    Credentials::from_map(vars)
}

fn chat_request() -> ChatRequest {
    ChatRequest {
        system: "system".to_owned(),
        user: "user".to_owned(),
        max_tokens: 100,
        temperature: 0.7,
        json_mode: false,
        model_override: None,
    }
}

const VALID_DASHSCOPE_KEY: &str = "sk-0123456789abcdef012345";

#[test]
fn prefers_openai_when_both_keys_are_well_formed() {
    let creds = credentials(&[
        ("OPENAI_API_KEY", "sk-openai-test-key"),
        ("DASHSCOPE_API_KEY", VALID_DASHSCOPE_KEY),
    ]);
    let gateway = ModelGateway::from_credentials(&creds, &GatewayConfig::default());

    assert!(gateway.is_configured());
    let provider = gateway.active_provider().expect("provider selected");
    assert_eq!(provider.name(), "openai");
    assert_eq!(provider.model(), "gpt-3.5-turbo");
}

#[test]
fn falls_back_to_dashscope_when_openai_key_is_absent() {
    let creds = credentials(&[("DASHSCOPE_API_KEY", VALID_DASHSCOPE_KEY)]);
    let gateway = ModelGateway::from_credentials(&creds, &GatewayConfig::default());

    let provider = gateway.active_provider().expect("provider selected");
    assert_eq!(provider.name(), "dashscope");
    assert_eq!(provider.model(), "qwen-turbo");
}

#[test]
fn placeholder_keys_do_not_configure_a_provider() {
    let creds = credentials(&[
        ("OPENAI_API_KEY", "sk-your-key-here"),
        ("DASHSCOPE_API_KEY", "sk-your-dashscope-key-here"),
    ]);
    let gateway = ModelGateway::from_credentials(&creds, &GatewayConfig::default());
    assert!(!gateway.is_configured());
}

#[test]
fn malformed_openai_key_defers_to_dashscope() {
    let creds = credentials(&[
        ("OPENAI_API_KEY", "not-a-key"),
        ("DASHSCOPE_API_KEY", VALID_DASHSCOPE_KEY),
    ]);
    let gateway = ModelGateway::from_credentials(&creds, &GatewayConfig::default());

    let provider = gateway.active_provider().expect("provider selected");
    assert_eq!(provider.name(), "dashscope");
}

#[test]
fn short_dashscope_key_is_rejected() {
    let creds = credentials(&[("DASHSCOPE_API_KEY", "sk-short")]);
    let gateway = ModelGateway::from_credentials(&creds, &GatewayConfig::default());
    assert!(!gateway.is_configured());
}

#[tokio::test]
async fn unconfigured_gateway_reports_unavailable_without_network() {
    let creds = credentials(&[]);
    let gateway = ModelGateway::from_credentials(&creds, &GatewayConfig::default());

    let result = gateway.complete(&chat_request()).await;
    assert!(matches!(result, Err(GatewayError::Unavailable)));
}

// ---------------------------------------------------------------------------
// Call behavior with scripted providers
// ---------------------------------------------------------------------------

struct EchoProvider;

#[async_trait]
impl ChatProvider for EchoProvider {
    async fn complete(&self, request: &ChatRequest) -> Result<String, GatewayError> {
        Ok(format!("echo: {}", request.user))
    }

    fn name(&self) -> &'static str {
        "echo"
    }

    fn model(&self) -> &str {
        "echo-model"
    }
}

struct HangingProvider;

#[async_trait]
impl ChatProvider for HangingProvider {
    async fn complete(&self, _request: &ChatRequest) -> Result<String, GatewayError> {
        tokio::time::sleep(Duration::from_secs(60)).await;
        Ok(String::new())
    }

    fn name(&self) -> &'static str {
        "hanging"
    }

    fn model(&self) -> &str {
        "hanging-model"
    }
}

#[tokio::test]
async fn first_strategy_serves_the_call() {
    let gateway = ModelGateway::with_providers(
        vec![Arc::new(EchoProvider), Arc::new(HangingProvider)],
        Duration::from_secs(5),
    );

    let text = gateway
        .complete(&chat_request())
        .await
        .expect("echo should answer");
    assert_eq!(text, "echo: user");
}

#[tokio::test]
async fn slow_provider_times_out() {
    let gateway =
        ModelGateway::with_providers(vec![Arc::new(HangingProvider)], Duration::from_millis(50));

    let result = gateway.complete(&chat_request()).await;
    assert!(matches!(result, Err(GatewayError::Timeout(_))));
}
