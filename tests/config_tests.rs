use stylecraft::core::config::{AppConfig, DEFAULT_API_URL, DEFAULT_MODEL};
use stylecraft::errors::StyleError;

#[test]
fn test_defaults_when_optional_fields_missing() {
    let config = AppConfig {
        api_key: "dummy_key".to_string(),
        api_url: None,
        model: None,
    };

    assert_eq!(config.api_url(), DEFAULT_API_URL);
    assert_eq!(config.model(), DEFAULT_MODEL);
}

#[test]
fn test_overrides_take_precedence() {
    let config = AppConfig {
        api_key: "dummy_key".to_string(),
        api_url: Some("http://localhost:8080/v1/chat/completions".to_string()),
        model: Some("deepseek-reasoner".to_string()),
    };

    assert_eq!(
        config.api_url(),
        "http://localhost:8080/v1/chat/completions"
    );
    assert_eq!(config.model(), "deepseek-reasoner");
}

#[test]
fn test_client_from_config_uses_model() {
    let config = AppConfig {
        api_key: "dummy_key".to_string(),
        api_url: None,
        model: Some("deepseek-reasoner".to_string()),
    };

    let client = stylecraft::ai::LlmClient::from_config(&config);
    assert_eq!(client.model_name(), "deepseek-reasoner");
}

fn lookup<'a>(
    vars: &'a [(&'a str, &'a str)],
) -> impl Fn(&str) -> Result<String, std::env::VarError> + 'a {
    move |name| {
        vars.iter()
            .find(|(k, _)| *k == name)
            .map(|(_, v)| (*v).to_string())
            .ok_or(std::env::VarError::NotPresent)
    }
}

#[test]
fn test_missing_api_key_fails() {
    let err = AppConfig::from_lookup(lookup(&[("DEEPSEEK_MODEL", "deepseek-chat")])).unwrap_err();
    match err {
        StyleError::Config(msg) => assert!(msg.contains("DEEPSEEK_API_KEY")),
        other => panic!("expected Config error, got {other:?}"),
    }
}

#[test]
fn test_blank_api_key_fails() {
    let err = AppConfig::from_lookup(lookup(&[("DEEPSEEK_API_KEY", "   ")])).unwrap_err();
    match err {
        StyleError::Config(msg) => assert!(msg.contains("must not be empty")),
        other => panic!("expected Config error, got {other:?}"),
    }
}

#[test]
fn test_blank_url_and_model_fall_back_to_defaults() {
    let config = AppConfig::from_lookup(lookup(&[
        ("DEEPSEEK_API_KEY", "sk-test"),
        ("DEEPSEEK_API_URL", ""),
        ("DEEPSEEK_MODEL", "  "),
    ]))
    .unwrap();

    assert_eq!(config.api_key, "sk-test");
    assert_eq!(config.api_url, None);
    assert_eq!(config.model, None);
    assert_eq!(config.api_url(), DEFAULT_API_URL);
    assert_eq!(config.model(), DEFAULT_MODEL);
}

#[test]
fn test_lookup_reads_overrides() {
    let config = AppConfig::from_lookup(lookup(&[
        ("DEEPSEEK_API_KEY", "sk-test"),
        ("DEEPSEEK_API_URL", "http://localhost:8080/v1/chat/completions"),
        ("DEEPSEEK_MODEL", "deepseek-reasoner"),
    ]))
    .unwrap();

    assert_eq!(config.api_url(), "http://localhost:8080/v1/chat/completions");
    assert_eq!(config.model(), "deepseek-reasoner");
}
