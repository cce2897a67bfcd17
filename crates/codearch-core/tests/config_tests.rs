use codearch_core::config::{
    ConfigError, DEFAULT_INCLUDE_EXAMPLES, DEFAULT_MAX_SOURCE_SIZE, ENV_UNKNOWN_FIELDS,
};
use codearch_core::{Config, StatusPolicy, UnknownFieldPolicy};
use std::io::Write;

#[test]
fn test_config_from_toml() {
    let toml_str = r#"
[validation]
unknown_fields = "ignore"
status = "strict"

[prompt]
include_examples = false
system_prompt = "Extract entities."
"#;
    let config: Config = toml::from_str(toml_str).unwrap();
    assert_eq!(config.validation.unknown_fields, UnknownFieldPolicy::Ignore);
    assert_eq!(config.validation.status, StatusPolicy::Strict);
    assert!(!config.prompt.include_examples);
    assert_eq!(config.prompt.max_source_size, DEFAULT_MAX_SOURCE_SIZE);
    assert_eq!(config.prompt.system_prompt.as_deref(), Some("Extract entities."));
}

#[test]
fn test_partial_config_keeps_defaults() {
    let config: Config = toml::from_str("[validation]\nstatus = \"strict\"\n").unwrap();
    assert_eq!(config.validation.unknown_fields, UnknownFieldPolicy::Reject);
    assert_eq!(config.validation.status, StatusPolicy::Strict);
    assert_eq!(config.prompt.include_examples, DEFAULT_INCLUDE_EXAMPLES);
}

#[test]
fn test_default_config_string_round_trips() {
    let rendered = Config::default_config_string();
    let parsed: Config = toml::from_str(&rendered).unwrap();
    assert_eq!(parsed, Config::default());
}

#[test]
fn test_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[prompt]\nmax_source_size = 512").unwrap();

    let mut config = Config::from_file(file.path()).unwrap();
    assert_eq!(config.prompt.max_source_size, 512);

    config
        .apply_overrides(|key| (key == ENV_UNKNOWN_FIELDS).then(|| "ignore".to_string()))
        .unwrap();
    assert_eq!(config.validation.unknown_fields, UnknownFieldPolicy::Ignore);
}

#[test]
fn test_from_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = Config::from_file(dir.path().join("missing.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::ReadError { .. }));
    assert!(err.to_string().contains("missing.toml"));
}

#[test]
fn test_from_invalid_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[validation]\nunknown_fields = \"drop\"").unwrap();

    let err = Config::from_file(file.path()).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError(_)));
}
