//! Configuration precedence and validation.

use wayfarer::config::PlannerConfig;

#[test]
fn defaults_match_the_documented_tuning() {
    let config = PlannerConfig::default();
    let gateway = &config.gateway;

    assert_eq!(gateway.request_timeout_secs, 30);
    assert_eq!(gateway.max_tokens, 4000);
    assert_eq!(gateway.temperature, 0.7);
    assert_eq!(gateway.openai.base_url, "https://api.openai.com/v1");
    assert_eq!(gateway.openai.model, "gpt-3.5-turbo");
    assert_eq!(
        gateway.dashscope.base_url,
        "https://dashscope.aliyuncs.com/compatible-mode/v1"
    );
    assert_eq!(gateway.dashscope.model, "qwen-turbo");
    assert_eq!(gateway.analysis_model, "gpt-4-turbo-preview");
    assert!(config.validate().is_ok());
}

#[test]
fn toml_overrides_defaults() {
    let config = PlannerConfig::from_toml(
        r#"
        [gateway]
        request_timeout_secs = 10
        temperature = 0.2

        [gateway.openai]
        base_url = "https://proxy.example.com/v1"
        model = "gpt-4o-mini"
        "#,
    )
    .expect("toml parses");

    assert_eq!(config.gateway.request_timeout_secs, 10);
    assert_eq!(config.gateway.temperature, 0.2);
    assert_eq!(config.gateway.openai.base_url, "https://proxy.example.com/v1");
    assert_eq!(config.gateway.openai.model, "gpt-4o-mini");
    // Untouched sections keep their defaults.
    assert_eq!(config.gateway.max_tokens, 4000);
    assert_eq!(config.gateway.dashscope.model, "qwen-turbo");
}

#[test]
fn env_overrides_beat_file_values() {
    let mut config = PlannerConfig::from_toml(
        r#"
        [gateway]
        request_timeout_secs = 10
        "#,
    )
    .expect("toml parses");

    config.apply_overrides(|key| match key {
        "WAYFARER_TIMEOUT_SECS" => Some("5".to_owned()),
        "OPENAI_BASE_URL" => Some("https://relay.example.com/v1".to_owned()),
        "WAYFARER_ANALYSIS_MODEL" => Some("gpt-4o".to_owned()),
        _ => None,
    });

    assert_eq!(config.gateway.request_timeout_secs, 5);
    assert_eq!(config.gateway.openai.base_url, "https://relay.example.com/v1");
    assert_eq!(config.gateway.analysis_model, "gpt-4o");
}

#[test]
fn invalid_env_override_is_ignored() {
    let mut config = PlannerConfig::default();
    config.apply_overrides(|key| match key {
        "WAYFARER_TIMEOUT_SECS" => Some("not-a-number".to_owned()),
        "WAYFARER_MAX_TOKENS" => Some("-3".to_owned()),
        _ => None,
    });

    assert_eq!(config.gateway.request_timeout_secs, 30);
    assert_eq!(config.gateway.max_tokens, 4000);
}

#[test]
fn validation_rejects_bad_base_url() {
    let config = PlannerConfig::from_toml(
        r#"
        [gateway.openai]
        base_url = "not a url"
        model = "gpt-3.5-turbo"
        "#,
    )
    .expect("toml parses");

    assert!(config.validate().is_err());
}

#[test]
fn validation_rejects_zero_timeout() {
    let config = PlannerConfig::from_toml(
        r#"
        [gateway]
        request_timeout_secs = 0
        "#,
    )
    .expect("toml parses");

    assert!(config.validate().is_err());
}
