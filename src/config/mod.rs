mod types;

pub use types::*;

use crate::{Error, Result};
use std::{env, io::ErrorKind};
use tracing::debug;

const DEFAULT_CONFIG_PATH: &str = "config.yaml";

/// Loads the service configuration.
///
/// Reads `CONFIG_PATH` (or `config.yaml` when unset), applies environment
/// overrides and validates the result.
pub async fn load() -> Result<Config> {
    let explicit_path = env::var("CONFIG_PATH").ok();
    let config_path = explicit_path
        .clone()
        .unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string());

    let mut config = read_config_file(&config_path, explicit_path.is_some()).await?;

    config.apply_env_overrides(|key| env::var(key).ok())?;
    config.validate()?;

    Ok(config)
}

/// Parses the YAML file at `config_path`. When `required` is false a missing
/// file yields the built-in configuration.
pub async fn read_config_file(config_path: &str, required: bool) -> Result<Config> {
    debug!("Loading configuration from: {}", config_path);

    match tokio::fs::read_to_string(config_path).await {
        Ok(config_str) => Config::from_yaml_str(&config_str),
        Err(e) if e.kind() == ErrorKind::NotFound && !required => {
            debug!("No {} found, using built-in configuration", config_path);
            Ok(Config::default())
        }
        Err(e) => Err(Error::config(format!(
            "failed to read {}: {}",
            config_path, e
        ))),
    }
}

impl Config {
    pub fn from_yaml_str(config_str: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(config_str)?)
    }

    /// Applies `GEMINI_API_KEY`, `LLM_MODEL` and `PORT` from `lookup`.
    pub fn apply_env_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(api_key) = lookup("GEMINI_API_KEY").filter(|k| !k.trim().is_empty()) {
            self.llm.api_key = api_key.trim().to_string();
        }

        if let Some(model) = lookup("LLM_MODEL").filter(|m| !m.trim().is_empty()) {
            self.llm.model = model.trim().to_string();
        }

        if let Some(port) = lookup("PORT") {
            self.server.port = port
                .trim()
                .parse()
                .map_err(|_| Error::config(format!("invalid PORT value: '{}'", port)))?;
        }

        Ok(())
    }

    /// Rejects configurations the service cannot start with.
    pub fn validate(&self) -> Result<()> {
        if self.llm.api_key.trim().is_empty() {
            return Err(Error::config("GEMINI_API_KEY not set"));
        }

        if self.llm.model.trim().is_empty() {
            return Err(Error::config("llm.model must not be empty"));
        }

        if self.llm.timeout_secs == 0 {
            return Err(Error::config("llm.timeout_secs must be greater than zero"));
        }

        self.syllabus.validate()?;
        self.validate_request_defaults()
    }

    fn validate_request_defaults(&self) -> Result<()> {
        let defaults = &self.request_defaults;
        let syllabus = &self.syllabus;

        if let Some(ref class_level) = defaults.class_level {
            if !syllabus.permits_class(class_level) {
                return Err(Error::config(format!(
                    "request_defaults.class_level '{}' is not a permitted class",
                    class_level
                )));
            }
        }

        if let Some(ref subject) = defaults.subject {
            if !syllabus.permits_subject(subject) {
                return Err(Error::config(format!(
                    "request_defaults.subject '{}' is not a permitted subject",
                    subject
                )));
            }
        }

        if let Some(ref chapter) = defaults.chapter {
            let known = match defaults.subject {
                Some(ref subject) => syllabus.permits_chapter(subject, chapter),
                None => syllabus
                    .subjects()
                    .any(|subject| syllabus.permits_chapter(subject, chapter)),
            };
            if !known {
                return Err(Error::config(format!(
                    "request_defaults.chapter '{}' is not in the syllabus",
                    chapter
                )));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;

    const SAMPLE_CONFIG_YAML: &str = r#"
server:
  host: "127.0.0.1"
  port: 9000
  logs:
    level: "debug"

llm:
  api_key: "file-key"
  model: "gemini-2.5-flash"
  timeout_secs: 30

syllabus:
  class_levels: ["9", "10"]
  subjects:
    Maths:
      - Algebra
      - Geometry
    Physics:
      - Light
"#;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_parse_sample_config() {
        let config = Config::from_yaml_str(SAMPLE_CONFIG_YAML).unwrap();

        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.logs.level, "debug");
        assert!(config.server.cors_allow_any_origin);
        assert_eq!(config.llm.model, "gemini-2.5-flash");
        assert_eq!(config.llm.timeout_secs, 30);
        assert_eq!(
            config.llm.base_url,
            "https://generativelanguage.googleapis.com/v1beta/openai"
        );
        assert!(config.syllabus.permits_class("9"));
        assert_eq!(
            config.syllabus.subjects().collect::<Vec<_>>(),
            vec!["Maths", "Physics"]
        );
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_defaults_match_icse_class_10() {
        let config = Config::default();

        assert_eq!(config.server.port, 8080);
        assert_eq!(config.llm.model, "gemini-2.5-flash-lite");
        assert!(config.syllabus.permits_class("10"));
        assert!(config.syllabus.permits_chapter("Maths", "Algebra"));
        assert_eq!(config.request_defaults, RequestDefaults::default());
    }

    #[test]
    fn test_missing_api_key_is_fatal() {
        let config = Config::default();
        let err = config.validate().unwrap_err();

        assert!(matches!(err, Error::Config(_)));
        assert!(err.to_string().contains("GEMINI_API_KEY not set"));
    }

    #[test]
    fn test_env_overrides() {
        let mut config = Config::from_yaml_str(SAMPLE_CONFIG_YAML).unwrap();
        config
            .apply_env_overrides(lookup_from(&[
                ("GEMINI_API_KEY", "env-key"),
                ("LLM_MODEL", "gemini-2.0-flash"),
                ("PORT", "10000"),
            ]))
            .unwrap();

        assert_eq!(config.llm.api_key, "env-key");
        assert_eq!(config.llm.model, "gemini-2.0-flash");
        assert_eq!(config.server.port, 10000);
    }

    #[test]
    fn test_blank_env_key_does_not_clear_file_key() {
        let mut config = Config::from_yaml_str(SAMPLE_CONFIG_YAML).unwrap();
        config
            .apply_env_overrides(lookup_from(&[("GEMINI_API_KEY", "   ")]))
            .unwrap();

        assert_eq!(config.llm.api_key, "file-key");
    }

    #[test]
    fn test_invalid_port_override() {
        let mut config = Config::default();
        let err = config
            .apply_env_overrides(lookup_from(&[("PORT", "eighty")]))
            .unwrap_err();

        assert!(err.to_string().contains("invalid PORT value"));
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let mut config = Config::default();
        config.llm.api_key = "key".to_string();
        config.llm.timeout_secs = 0;

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_request_defaults_must_be_in_syllabus() {
        let mut config = Config::default();
        config.llm.api_key = "key".to_string();

        config.request_defaults.class_level = Some("10".to_string());
        config.request_defaults.chapter = Some("Light".to_string());
        assert!(config.validate().is_ok());

        config.request_defaults.subject = Some("Maths".to_string());
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("request_defaults.chapter"));

        config.request_defaults.subject = Some("Chemistry".to_string());
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("request_defaults.subject"));
    }

    #[test]
    fn test_invalid_yaml() {
        let result = Config::from_yaml_str("server:\n  port: \"not-a-number\"\n");
        assert!(matches!(result, Err(Error::Yaml(_))));
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let mut config = LlmConfig::default();
        config.api_key = "super-secret".to_string();

        let rendered = format!("{:?}", config);
        assert!(!rendered.contains("super-secret"));
        assert!(rendered.contains("<redacted>"));
    }
}
