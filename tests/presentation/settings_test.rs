use genai_svc::presentation::config::{
    DEFAULT_HOST, DEFAULT_PORT, Environment, LlmProvider, Settings, SettingsError,
};

fn no_env(_: &str) -> Option<String> {
    None
}

#[test]
fn given_no_env_vars_when_loading_then_uses_defaults() {
    let settings = Settings::from_lookup(no_env).unwrap();

    assert_eq!(settings.server.host, DEFAULT_HOST);
    assert_eq!(settings.server.port, DEFAULT_PORT);
    assert_eq!(settings.server.address(), "0.0.0.0:8083");
    assert_eq!(settings.llm.provider, LlmProvider::Fake);
    assert_eq!(settings.environment, Environment::Local);
    assert!(!settings.logging.json_format);
}

#[test]
fn given_overrides_when_loading_then_applies_them() {
    let settings = Settings::from_lookup(|key| match key {
        "SERVER_HOST" => Some("127.0.0.1".to_string()),
        "SERVER_PORT" => Some("9000".to_string()),
        "LLM_PROVIDER" => Some("Echo".to_string()),
        "APP_ENV" => Some("test".to_string()),
        _ => None,
    })
    .unwrap();

    assert_eq!(settings.server.address(), "127.0.0.1:9000");
    assert_eq!(settings.llm.provider, LlmProvider::Echo);
    assert_eq!(settings.environment, Environment::Test);
}

#[test]
fn given_invalid_port_when_loading_then_returns_error() {
    let result = Settings::from_lookup(|key| (key == "SERVER_PORT").then(|| "http".to_string()));

    assert!(matches!(
        result,
        Err(SettingsError::Invalid {
            key: "SERVER_PORT",
            ..
        })
    ));
}

#[test]
fn given_unknown_provider_when_loading_then_returns_error() {
    let result =
        Settings::from_lookup(|key| (key == "LLM_PROVIDER").then(|| "gpt".to_string()));

    assert!(matches!(
        result,
        Err(SettingsError::Invalid {
            key: "LLM_PROVIDER",
            ..
        })
    ));
}

#[test]
fn given_unknown_environment_when_parsing_then_returns_error() {
    let result = Environment::try_from("staging".to_string());

    assert!(result.is_err());
}

#[test]
fn given_partial_json_when_deserializing_then_fills_defaults() {
    let settings: Settings =
        serde_json::from_str(r#"{"server": {"port": 9100}, "llm": {"provider": "echo"}}"#)
            .unwrap();

    assert_eq!(settings.server.host, DEFAULT_HOST);
    assert_eq!(settings.server.port, 9100);
    assert_eq!(settings.llm.provider, LlmProvider::Echo);
    assert_eq!(settings.environment, Environment::Local);
}

#[test]
fn given_invalid_provider_in_json_when_deserializing_then_fails() {
    let result: Result<Settings, _> = serde_json::from_str(r#"{"llm": {"provider": "gpt"}}"#);

    assert!(result.is_err());
}
