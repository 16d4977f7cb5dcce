use crate::services::providers::gemini::{DEFAULT_GEMINI_MODEL, GEMINI_API_BASE};
use secrecy::{ExposeSecret, Secret};
use service_core::config as core_config;
use service_core::error::AppError;
use std::env;

/// Settings for the workshop API, read once at startup and never mutated.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub common: core_config::Config,
    pub gemini: GeminiSettings,
    /// OTLP collector for trace export. Tracing stays local when unset.
    pub otlp_endpoint: Option<String>,
}

#[derive(Debug, Clone)]
pub struct GeminiSettings {
    /// `None` when `GEMINI_API_KEY` is unset or empty.
    pub api_key: Option<Secret<String>>,
    pub model: String,
    pub api_base: String,
}

impl GeminiSettings {
    pub fn is_configured(&self) -> bool {
        self.api_key
            .as_ref()
            .is_some_and(|key| !key.expose_secret().is_empty())
    }
}

impl Default for GeminiSettings {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_GEMINI_MODEL.to_string(),
            api_base: GEMINI_API_BASE.to_string(),
        }
    }
}

impl ApiConfig {
    pub fn load() -> Result<Self, AppError> {
        let common = core_config::Config::load()?;

        Ok(ApiConfig {
            common,
            gemini: GeminiSettings {
                api_key: optional_env("GEMINI_API_KEY").map(Secret::new),
                model: get_env("GEMINI_MODEL", DEFAULT_GEMINI_MODEL),
                api_base: get_env("GEMINI_API_BASE", GEMINI_API_BASE),
            },
            otlp_endpoint: optional_env("OTLP_ENDPOINT"),
        })
    }
}

fn optional_env(key: &str) -> Option<String> {
    env::var(key).ok().filter(|val| !val.is_empty())
}

fn get_env(key: &str, default: &str) -> String {
    optional_env(key).unwrap_or_else(|| default.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_gemini_settings_are_unconfigured() {
        let settings = GeminiSettings::default();
        assert!(!settings.is_configured());
        assert_eq!(settings.model, "gemini-2.0-flash");
    }

    #[test]
    fn empty_key_counts_as_unconfigured() {
        let settings = GeminiSettings {
            api_key: Some(Secret::new(String::new())),
            ..GeminiSettings::default()
        };
        assert!(!settings.is_configured());
    }

    #[test]
    fn debug_output_redacts_key() {
        let settings = GeminiSettings {
            api_key: Some(Secret::new("super-secret".to_string())),
            ..GeminiSettings::default()
        };
        assert!(settings.is_configured());
        assert!(!format!("{:?}", settings).contains("super-secret"));
    }
}
