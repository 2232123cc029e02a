use std::time::Duration;

use groq::client::{DEFAULT_API_URL, DEFAULT_MODEL};

use super::{error::ConfigError, read_var};

/// Configuration for Groq API access.
#[derive(Debug, Clone)]
pub struct GroqConfig {
    pub api_key: String,
    pub api_url: String,
    pub model: String,
    pub timeout: Option<Duration>,
}

impl GroqConfig {
    /// Environment variables:
    /// - GROQ_API_KEY: API key (required)
    /// - GROQ_API_URL: Chat completions endpoint (default: Groq's OpenAI-compatible URL)
    /// - GROQ_MODEL: Model identifier (default: "llama3-70b-8192")
    /// - GROQ_TIMEOUT_SECS: Optional per-request timeout; unset means none
    pub fn from_lookup<F>(lookup: &F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key =
            read_var(lookup, "GROQ_API_KEY").ok_or(ConfigError::Missing("GROQ_API_KEY"))?;
        let api_url =
            read_var(lookup, "GROQ_API_URL").unwrap_or_else(|| DEFAULT_API_URL.to_string());
        let model = read_var(lookup, "GROQ_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string());

        let timeout = match read_var(lookup, "GROQ_TIMEOUT_SECS") {
            Some(value) => match value.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => Some(Duration::from_secs(secs)),
                _ => {
                    return Err(ConfigError::Invalid {
                        name: "GROQ_TIMEOUT_SECS",
                        value,
                    });
                }
            },
            None => None,
        };

        Ok(Self {
            api_key,
            api_url,
            model,
            timeout,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_support::lookup_from;

    #[test]
    fn should_fail_when_api_key_is_missing() {
        let result = GroqConfig::from_lookup(&lookup_from(&[("GROQ_MODEL", "llama3-8b-8192")]));

        assert_eq!(result.unwrap_err(), ConfigError::Missing("GROQ_API_KEY"));
    }

    #[test]
    fn should_treat_empty_api_key_as_missing() {
        let result = GroqConfig::from_lookup(&lookup_from(&[("GROQ_API_KEY", "")]));

        assert_eq!(result.unwrap_err(), ConfigError::Missing("GROQ_API_KEY"));
    }

    #[test]
    fn should_apply_defaults_when_only_key_is_set() {
        let config =
            GroqConfig::from_lookup(&lookup_from(&[("GROQ_API_KEY", "gsk_test")])).unwrap();

        assert_eq!(config.api_key, "gsk_test");
        assert_eq!(
            config.api_url,
            "https://api.groq.com/openai/v1/chat/completions"
        );
        assert_eq!(config.model, "llama3-70b-8192");
        assert!(config.timeout.is_none());
    }

    #[test]
    fn should_read_optional_overrides() {
        let config = GroqConfig::from_lookup(&lookup_from(&[
            ("GROQ_API_KEY", "gsk_test"),
            ("GROQ_API_URL", "http://localhost:8081/v1/chat/completions"),
            ("GROQ_MODEL", "mixtral-8x7b-32768"),
            ("GROQ_TIMEOUT_SECS", "20"),
        ]))
        .unwrap();

        assert_eq!(config.api_url, "http://localhost:8081/v1/chat/completions");
        assert_eq!(config.model, "mixtral-8x7b-32768");
        assert_eq!(config.timeout, Some(Duration::from_secs(20)));
    }

    #[test]
    fn should_reject_zero_timeout() {
        let result = GroqConfig::from_lookup(&lookup_from(&[
            ("GROQ_API_KEY", "gsk_test"),
            ("GROQ_TIMEOUT_SECS", "0"),
        ]));

        assert!(matches!(
            result.unwrap_err(),
            ConfigError::Invalid {
                name: "GROQ_TIMEOUT_SECS",
                ..
            }
        ));
    }
}
