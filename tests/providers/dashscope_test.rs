//! DashScope compatible-mode dialect checks.
//!
//! DashScope reuses the chat-completions wire builders with strict-JSON
//! mode disabled and the model pinned; these tests pin that composition.

use wayfarer::config::ProviderEndpoint;
use wayfarer::providers::dashscope::DashScopeProvider;
use wayfarer::providers::openai::build_request;
use wayfarer::providers::{ChatProvider, ChatRequest};

fn endpoint() -> ProviderEndpoint {
    ProviderEndpoint {
        base_url: "https://dashscope.aliyuncs.com/compatible-mode/v1".to_owned(),
        model: "qwen-turbo".to_owned(),
    }
}

#[test]
fn provider_reports_configured_model() {
    let provider = DashScopeProvider::new(&endpoint(), "sk-test".to_owned());
    assert_eq!(provider.name(), "dashscope");
    assert_eq!(provider.model(), "qwen-turbo");
}

#[test]
fn compatible_dialect_never_requests_response_format() {
    let request = ChatRequest {
        system: "system".to_owned(),
        user: "user".to_owned(),
        max_tokens: 4000,
        temperature: 0.7,
        json_mode: true,
        model_override: None,
    };

    let wire = build_request("qwen-turbo", &request, false);
    let value = serde_json::to_value(&wire).expect("serializes");
    assert!(value.get("response_format").is_none());
    assert_eq!(value["model"], "qwen-turbo");
}

#[test]
fn trailing_slash_in_base_url_is_tolerated() {
    let provider = DashScopeProvider::new(
        &ProviderEndpoint {
            base_url: "https://dashscope.aliyuncs.com/compatible-mode/v1/".to_owned(),
            model: "qwen-turbo".to_owned(),
        },
        "sk-test".to_owned(),
    );
    assert_eq!(provider.model(), "qwen-turbo");
}
