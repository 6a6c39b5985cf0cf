//! Generative backend configuration
//!
//! The backend is optional. Without an API key every advisory request is
//! answered by the deterministic fallback generators.

use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Generative backend configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AiConfig {
    /// OpenAI API key; absent means fallback-only
    #[serde(default)]
    pub openai_api_key: Option<Secret<String>>,

    #[serde(default = "default_model")]
    pub model: String,

    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Backend call timeout in seconds; the fallback path runs after it
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    #[serde(default = "default_temperature")]
    pub temperature: f32,

    /// Token ceiling for structured advisory calls
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,

    /// Token ceiling for chat replies
    #[serde(default = "default_chat_max_tokens")]
    pub chat_max_tokens: u32,
}

impl AiConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// The API key, when one is configured and non-blank.
    pub fn api_key(&self) -> Option<&str> {
        self.openai_api_key
            .as_ref()
            .map(|k| k.expose_secret().as_str())
            .filter(|k| !k.trim().is_empty())
    }

    pub fn has_backend(&self) -> bool {
        self.api_key().is_some()
    }

    /// Validate AI configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(ValidationError::InvalidAiBaseUrl);
        }
        if self.timeout_secs == 0 || self.timeout_secs > 120 {
            return Err(ValidationError::InvalidAiTimeout);
        }
        if !(0.0..=2.0).contains(&self.temperature) {
            return Err(ValidationError::InvalidTemperature);
        }
        if self.max_tokens == 0 || self.chat_max_tokens == 0 {
            return Err(ValidationError::InvalidTokenLimit);
        }
        Ok(())
    }
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            openai_api_key: None,
            model: default_model(),
            base_url: default_base_url(),
            timeout_secs: default_timeout(),
            temperature: default_temperature(),
            max_tokens: default_max_tokens(),
            chat_max_tokens: default_chat_max_tokens(),
        }
    }
}

fn default_model() -> String {
    "gpt-4-turbo-preview".to_string()
}

fn default_base_url() -> String {
    "https://api.openai.com/v1".to_string()
}

fn default_timeout() -> u64 {
    10
}

fn default_temperature() -> f32 {
    0.7
}

fn default_max_tokens() -> u32 {
    2000
}

fn default_chat_max_tokens() -> u32 {
    1000
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ai_config_defaults() {
        let config = AiConfig::default();
        assert_eq!(config.model, "gpt-4-turbo-preview");
        assert_eq!(config.timeout(), Duration::from_secs(10));
        assert_eq!(config.max_tokens, 2000);
        assert_eq!(config.chat_max_tokens, 1000);
        assert!(!config.has_backend());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_blank_key_means_no_backend() {
        let config = AiConfig {
            openai_api_key: Some(Secret::new("  ".to_string())),
            ..Default::default()
        };
        assert!(!config.has_backend());

        let config = AiConfig {
            openai_api_key: Some(Secret::new("sk-xxx".to_string())),
            ..Default::default()
        };
        assert_eq!(config.api_key(), Some("sk-xxx"));
    }

    #[test]
    fn test_validation_rejects_bad_values() {
        let bad = [
            AiConfig {
                base_url: "api.openai.com".to_string(),
                ..Default::default()
            },
            AiConfig {
                timeout_secs: 0,
                ..Default::default()
            },
            AiConfig {
                temperature: 3.5,
                ..Default::default()
            },
            AiConfig {
                chat_max_tokens: 0,
                ..Default::default()
            },
        ];
        for config in bad {
            assert!(config.validate().is_err());
        }
    }
}
