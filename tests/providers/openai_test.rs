//! Chat-completions wire format tests.

use wayfarer::providers::openai::{build_request, parse_response};
use wayfarer::providers::{ChatRequest, GatewayError};

fn simple_request() -> ChatRequest {
    ChatRequest {
        system: "你是专业的旅行规划师。".to_owned(),
        user: "请规划行程。".to_owned(),
        max_tokens: 4000,
        temperature: 0.7,
        json_mode: false,
        model_override: None,
    }
}

#[test]
fn build_request_sets_model_messages_and_params() {
    let req = build_request("gpt-3.5-turbo", &simple_request(), true);

    assert_eq!(req.model, "gpt-3.5-turbo");
    assert_eq!(req.max_tokens, 4000);
    assert_eq!(req.temperature, 0.7);
    assert_eq!(req.messages.len(), 2);
    assert_eq!(req.messages[0].role, "system");
    assert_eq!(req.messages[0].content, "你是专业的旅行规划师。");
    assert_eq!(req.messages[1].role, "user");
    assert_eq!(req.messages[1].content, "请规划行程。");
}

#[test]
fn json_mode_sets_response_format_when_honored() {
    let mut request = simple_request();
    request.json_mode = true;

    let honored = build_request("gpt-3.5-turbo", &request, true);
    let wire = serde_json::to_value(&honored).expect("serializes");
    assert_eq!(wire["response_format"]["type"], "json_object");
}

#[test]
fn json_mode_is_dropped_when_not_honored() {
    let mut request = simple_request();
    request.json_mode = true;

    let ignored = build_request("qwen-turbo", &request, false);
    let wire = serde_json::to_value(&ignored).expect("serializes");
    assert!(wire.get("response_format").is_none());
}

#[test]
fn model_override_replaces_default_model() {
    let mut request = simple_request();
    request.model_override = Some("gpt-4-turbo-preview".to_owned());

    let req = build_request("gpt-3.5-turbo", &request, true);
    assert_eq!(req.model, "gpt-4-turbo-preview");
}

#[test]
fn parse_response_returns_first_choice_text() {
    let body = r#"{"choices": [{"message": {"content": "行程如下……"}}]}"#;
    let text = parse_response(body).expect("should parse");
    assert_eq!(text, "行程如下……");
}

#[test]
fn parse_response_rejects_missing_choices() {
    let result = parse_response(r#"{"choices": []}"#);
    assert!(matches!(result, Err(GatewayError::Parse(_))));
}

#[test]
fn parse_response_rejects_empty_content() {
    let result = parse_response(r#"{"choices": [{"message": {"content": ""}}]}"#);
    assert!(matches!(result, Err(GatewayError::Parse(_))));
}

#[test]
fn parse_response_rejects_non_json_body() {
    let result = parse_response("<html>bad gateway</html>");
    assert!(matches!(result, Err(GatewayError::Parse(_))));
}
