//! Configuration management for CodeArch.
//!
//! Configuration is loaded from multiple sources with the following priority:
//! 1. Environment variables (highest priority)
//! 2. Project-local `codearch.toml` file
//! 3. User config `~/.config/codearch/config.toml`
//! 4. Built-in defaults (lowest priority)

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

mod defaults;

pub use defaults::*;

use crate::schema::ValidationPolicy;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {}: {source}", path.display())]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Main configuration structure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// How candidate records are validated.
    pub validation: ValidationPolicy,

    /// Extraction prompt rendering.
    pub prompt: PromptConfig,
}

impl Config {
    /// Load configuration from default locations.
    ///
    /// Searches for config in order:
    /// 1. `./codearch.toml` (project local)
    /// 2. `~/.config/codearch/config.toml` (user config)
    /// 3. Falls back to defaults
    ///
    /// Environment overrides apply in every case.
    pub fn load() -> Result<Self, ConfigError> {
        if let Some(path) = Self::discover() {
            return Self::from_file(path);
        }

        let mut config = Self::default();
        config.apply_env_overrides()?;
        Ok(config)
    }

    /// First existing config file among the default locations.
    pub fn discover() -> Option<PathBuf> {
        let local = PathBuf::from(DEFAULT_CONFIG_FILE);
        if local.exists() {
            return Some(local);
        }

        dirs::config_dir()
            .map(|dir| dir.join(DEFAULT_USER_CONFIG_DIR).join(DEFAULT_USER_CONFIG_FILE))
            .filter(|path| path.exists())
    }

    /// Load configuration from a specific file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadError {
            path: path.to_path_buf(),
            source,
        })?;
        let mut config: Config = toml::from_str(&content)?;
        debug!(path = %path.display(), "loaded config file");

        config.apply_env_overrides()?;
        Ok(config)
    }

    /// Apply environment variable overrides.
    pub fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        self.apply_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from any key lookup (environment, test fixtures).
    ///
    /// Values that do not parse are rejected rather than skipped.
    pub fn apply_overrides(
        &mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<(), ConfigError> {
        if let Some(value) = lookup(ENV_UNKNOWN_FIELDS) {
            self.validation.unknown_fields = value
                .parse()
                .map_err(|e| ConfigError::Invalid(format!("{}: {}", ENV_UNKNOWN_FIELDS, e)))?;
        }
        if let Some(value) = lookup(ENV_STATUS_POLICY) {
            self.validation.status = value
                .parse()
                .map_err(|e| ConfigError::Invalid(format!("{}: {}", ENV_STATUS_POLICY, e)))?;
        }
        if let Some(value) = lookup(ENV_PROMPT_EXAMPLES) {
            self.prompt.include_examples = parse_bool(&value).ok_or_else(|| {
                ConfigError::Invalid(format!(
                    "{}: expected true or false, got '{}'",
                    ENV_PROMPT_EXAMPLES, value
                ))
            })?;
        }
        if let Some(value) = lookup(ENV_MAX_SOURCE_SIZE) {
            self.prompt.max_source_size = value.trim().parse().map_err(|_| {
                ConfigError::Invalid(format!(
                    "{}: expected a byte count, got '{}'",
                    ENV_MAX_SOURCE_SIZE, value
                ))
            })?;
        }
        Ok(())
    }

    /// Create a default config file content as a string.
    pub fn default_config_string() -> String {
        let config = Config::default();
        toml::to_string_pretty(&config).unwrap_or_default()
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Extraction prompt configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PromptConfig {
    /// Include sample entities for every kind.
    pub include_examples: bool,

    /// Maximum size of source text embedded in a prompt (in bytes).
    pub max_source_size: usize,

    /// System prompt for extraction.
    /// If not set, uses the built-in default.
    pub system_prompt: Option<String>,
}

impl Default for PromptConfig {
    fn default() -> Self {
        Self {
            include_examples: DEFAULT_INCLUDE_EXAMPLES,
            max_source_size: DEFAULT_MAX_SOURCE_SIZE,
            system_prompt: None, // Use built-in default
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{StatusPolicy, UnknownFieldPolicy};
    use std::collections::HashMap;

    fn overrides(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.validation.unknown_fields, DEFAULT_UNKNOWN_FIELD_POLICY);
        assert_eq!(config.validation.status, DEFAULT_STATUS_POLICY);
        assert_eq!(config.prompt.include_examples, DEFAULT_INCLUDE_EXAMPLES);
        assert!(config.prompt.system_prompt.is_none());
    }

    #[test]
    fn test_config_to_toml() {
        let toml_str = Config::default_config_string();
        assert!(toml_str.contains("[validation]"));
        assert!(toml_str.contains("unknown_fields = \"reject\""));
        assert!(toml_str.contains("status = \"open\""));
        assert!(toml_str.contains("[prompt]"));
    }

    #[test]
    fn test_env_overrides() {
        let mut config = Config::default();
        config
            .apply_overrides(overrides(&[
                (ENV_UNKNOWN_FIELDS, "ignore"),
                (ENV_STATUS_POLICY, "strict"),
                (ENV_PROMPT_EXAMPLES, "off"),
                (ENV_MAX_SOURCE_SIZE, "2048"),
            ]))
            .unwrap();

        assert_eq!(config.validation.unknown_fields, UnknownFieldPolicy::Ignore);
        assert_eq!(config.validation.status, StatusPolicy::Strict);
        assert!(!config.prompt.include_examples);
        assert_eq!(config.prompt.max_source_size, 2048);
    }

    #[test]
    fn test_invalid_env_override() {
        let mut config = Config::default();
        let err = config
            .apply_overrides(overrides(&[(ENV_STATUS_POLICY, "closed")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
        assert!(err.to_string().contains(ENV_STATUS_POLICY));
    }
}
