//! Configuration integration tests

#[cfg(test)]
mod tests {
    use medtalk_gateway::GatewayError;
    use medtalk_gateway::config::{Config, SpeechBackend};
    use medtalk_gateway::utils::logging::LogLevel;
    use std::io::Write;
    use std::time::Duration;

    const FULL_CONFIG: &str = r#"
server:
  host: 127.0.0.1
  port: 9100
  workers: 2
  cors:
    allowed_origins: ["https://clinic.example.org"]
auth:
  api_keys: ["ward-a", "ward-b"]
providers:
  openai:
    api_key: sk-from-file
    chat_model: gpt-4o
  speech:
    provider: openai
pipeline:
  timeouts:
    translation_secs: 15
  max_audio_bytes: 1048576
storage:
  staging_dir: /tmp/medtalk-test/staging
  artifact_dir: /tmp/medtalk-test/audio
logging:
  level: debug
  file: ""
  json: true
"#;

    #[test]
    fn test_full_config_parses_and_validates() {
        let config = Config::from_yaml(FULL_CONFIG).unwrap();
        config.validate().unwrap();

        assert_eq!(config.server().address(), "127.0.0.1:9100");
        assert_eq!(config.server().workers, Some(2));
        assert!(!config.server().cors.allows_all_origins());
        assert_eq!(config.auth().api_keys.len(), 2);
        assert_eq!(config.providers().openai.chat_model, "gpt-4o");
        assert_eq!(config.providers().speech.provider, SpeechBackend::Openai);
        assert_eq!(
            config.pipeline().timeouts.translation(),
            Duration::from_secs(15)
        );
        // Unset budgets keep their defaults
        assert_eq!(
            config.pipeline().timeouts.transcription(),
            Duration::from_secs(60)
        );
        assert_eq!(config.logging().level, LogLevel::Debug);
        assert!(config.logging().log_file().is_none());
    }

    #[test]
    fn test_environment_overrides_file() {
        let mut config = Config::from_yaml(FULL_CONFIG).unwrap();
        config.apply_env_from(|name| match name {
            "GATEWAY_PORT" => Some("9200".to_string()),
            "GATEWAY_API_KEYS" => Some("env-a, env-b ,".to_string()),
            "OPENAI_API_KEY" => Some("sk-from-env".to_string()),
            _ => None,
        });

        assert_eq!(config.server().port, 9200);
        assert_eq!(config.auth().api_keys, vec!["env-a", "env-b"]);
        assert_eq!(
            config.providers().openai.api_key.as_deref(),
            Some("sk-from-env")
        );
    }

    #[test]
    fn test_invalid_configs_are_rejected() {
        let cases = [
            "auth:\n  api_keys: []\nproviders:\n  openai:\n    api_key: sk-x\n",
            "auth:\n  api_keys: [k]\n",
            "auth:\n  api_keys: [k]\nproviders:\n  openai:\n    api_key: sk-x\n    api_base: not a url\n",
            "auth:\n  api_keys: [k]\nproviders:\n  openai:\n    api_key: sk-x\npipeline:\n  timeouts:\n    synthesis_secs: 0\n",
        ];

        for yaml in cases {
            let config = Config::from_yaml(yaml).unwrap();
            let err = config.validate().unwrap_err();
            assert!(matches!(err, GatewayError::Config(_)), "{}", yaml);
        }
    }

    #[test]
    fn test_malformed_yaml() {
        let err = Config::from_yaml("server: [unterminated").unwrap_err();
        assert!(matches!(err, GatewayError::Config(_)));
    }

    #[tokio::test]
    async fn test_load_explicit_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(FULL_CONFIG.as_bytes()).unwrap();

        let config = Config::load(Some(file.path())).await.unwrap();
        assert_eq!(config.server().host, "127.0.0.1");
    }

    #[tokio::test]
    async fn test_load_missing_explicit_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent.yaml");

        let err = Config::load(Some(missing.as_path())).await.unwrap_err();
        assert!(matches!(err, GatewayError::Config(_)));
    }
}
