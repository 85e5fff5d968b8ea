use mailscreen_domain::{CliOverrides, Config, ConfigError};

fn parse(raw: &str) -> Config {
    toml::from_str(raw).expect("config should parse")
}

#[test]
fn test_full_config_parses() {
    let config = parse(
        r#"
[api]
api_key = "pk_live_1234"
free_tier = false
privacy_mode = true

[cache]
secret_key = "installation-secret"

[logging]
level = "debug"
"#,
    );

    assert_eq!(config.api.api_key, "pk_live_1234");
    assert!(!config.api.free_tier);
    assert!(config.api.privacy_mode);
    assert_eq!(config.cache.secret_key, "installation-secret");
    assert_eq!(config.logging.level, "debug");
    assert!(config.logging.targets);
}

#[test]
fn test_missing_sections_use_defaults() {
    let config = parse("");

    assert_eq!(config.api.api_key, "");
    assert!(!config.api.free_tier);
    assert!(!config.api.privacy_mode);
    assert_eq!(config.cache.secret_key, "");
    assert_eq!(config.logging.level, "info");
}

#[test]
fn test_overrides_take_precedence() {
    let mut config = Config::load(None, CliOverrides::default()).unwrap();
    assert_eq!(config.api.api_key, "");

    config = Config::load(
        None,
        CliOverrides {
            api_key: Some("cli-key".to_string()),
            free_tier: Some(true),
            privacy_mode: Some(true),
            secret_key: Some("cli-secret".to_string()),
        },
    )
    .unwrap();

    assert_eq!(config.api.api_key, "cli-key");
    assert!(config.api.free_tier);
    assert!(config.api.privacy_mode);
    assert_eq!(config.cache.secret_key, "cli-secret");
}

#[test]
fn test_validate_rejects_missing_secret() {
    let config = parse(
        r#"
[api]
free_tier = true
"#,
    );

    assert!(matches!(
        config.validate(),
        Err(ConfigError::MissingSecretKey)
    ));
}

#[test]
fn test_validate_rejects_missing_credentials() {
    let config = parse(
        r#"
[cache]
secret_key = "s"
"#,
    );

    assert!(matches!(
        config.validate(),
        Err(ConfigError::MissingCredentials)
    ));
}

#[test]
fn test_validate_accepts_free_tier_without_key() {
    let config = parse(
        r#"
[api]
free_tier = true

[cache]
secret_key = "s"
"#,
    );

    assert!(config.validate().is_ok());
}

#[test]
fn test_validate_accepts_api_key_without_free_tier() {
    let config = parse(
        r#"
[api]
api_key = "pk_live_1234"

[cache]
secret_key = "s"
"#,
    );

    assert!(config.validate().is_ok());
}
