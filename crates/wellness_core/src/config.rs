use std::time::Duration;

use secrecy::SecretString;

use crate::WellnessError;

/// Configuration for the text-generation endpoint.
#[derive(Clone, Debug)]
pub struct Config {
    pub base_url: String,
    pub model: String,
    pub api_key: Option<SecretString>,
    pub generation_timeout: Duration,
}

const DEFAULT_BASE_URL: &str = "http://127.0.0.1:11434/api";
const DEFAULT_MODEL: &str = "qwen2.5:1.5b";
const DEFAULT_TIMEOUT_SECS: u64 = 60;

impl Config {
    pub fn from_env() -> Result<Self, WellnessError> {
        Self::from_env_with(|k| std::env::var(k).ok())
    }

    /// Testable helper that reads configuration values using the provided
    /// function. This avoids mutating global environment in tests and keeps
    /// `from_env()` small and safe.
    pub fn from_env_with<F>(mut get: F) -> Result<Self, WellnessError>
    where
        F: FnMut(&str) -> Option<String>,
    {
        let base_url =
            get("WELLNESS_API_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let model = get("WELLNESS_MODEL_NAME").unwrap_or_else(|| DEFAULT_MODEL.to_string());
        let api_key = get("WELLNESS_API_KEY").map(|k| SecretString::new(k.into()));
        let generation_timeout = match get("WELLNESS_GENERATION_TIMEOUT_SECS") {
            Some(raw) => {
                let secs: u64 = raw.parse().map_err(|_| {
                    WellnessError::Config(format!(
                        "WELLNESS_GENERATION_TIMEOUT_SECS is not a number: {raw}"
                    ))
                })?;
                Duration::from_secs(secs)
            }
            None => Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        };
        Ok(Self {
            base_url,
            model,
            api_key,
            generation_timeout,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_when_env_is_empty() {
        let cfg = Config::from_env_with(|_| None).expect("cfg");
        assert_eq!(cfg.base_url, "http://127.0.0.1:11434/api");
        assert_eq!(cfg.model, "qwen2.5:1.5b");
        assert!(cfg.api_key.is_none());
        assert_eq!(cfg.generation_timeout, Duration::from_secs(60));
    }

    #[test]
    fn reads_overrides() {
        let get = |k: &str| match k {
            "WELLNESS_API_BASE_URL" => Some("http://gen.internal/api".into()),
            "WELLNESS_MODEL_NAME" => Some("llama3:8b".into()),
            "WELLNESS_GENERATION_TIMEOUT_SECS" => Some("120".into()),
            _ => None,
        };
        let cfg = Config::from_env_with(get).expect("cfg");
        assert_eq!(cfg.base_url, "http://gen.internal/api");
        assert_eq!(cfg.model, "llama3:8b");
        assert_eq!(cfg.generation_timeout, Duration::from_secs(120));
    }

    #[test]
    fn invalid_timeout_is_a_config_error() {
        let get = |k: &str| match k {
            "WELLNESS_GENERATION_TIMEOUT_SECS" => Some("soon".into()),
            _ => None,
        };
        assert!(Config::from_env_with(get).is_err());
    }
}
