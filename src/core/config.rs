use std::env;

use crate::errors::StyleError;

pub const DEFAULT_API_URL: &str = "https://api.deepseek.com/v1/chat/completions";
pub const DEFAULT_MODEL: &str = "deepseek-chat";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub api_key: String,
    pub api_url: Option<String>,
    pub model: Option<String>,
}

impl AppConfig {
    /// Reads `DEEPSEEK_API_KEY` (required), `DEEPSEEK_API_URL` and `DEEPSEEK_MODEL`.
    pub fn from_env() -> Result<Self, StyleError> {
        Self::from_lookup(|name| env::var(name))
    }

    /// Same as [`AppConfig::from_env`], reading variables through `get`.
    pub fn from_lookup<F>(get: F) -> Result<Self, StyleError>
    where
        F: Fn(&str) -> Result<String, env::VarError>,
    {
        let api_key = get("DEEPSEEK_API_KEY")
            .map_err(|e| StyleError::Config(format!("DEEPSEEK_API_KEY: {}", e)))?;
        if api_key.trim().is_empty() {
            return Err(StyleError::Config(
                "DEEPSEEK_API_KEY: must not be empty".to_string(),
            ));
        }

        let non_empty = |name: &str| get(name).ok().filter(|s| !s.trim().is_empty());

        Ok(Self {
            api_key,
            api_url: non_empty("DEEPSEEK_API_URL"),
            model: non_empty("DEEPSEEK_MODEL"),
        })
    }

    #[must_use]
    pub fn api_url(&self) -> &str {
        self.api_url.as_deref().unwrap_or(DEFAULT_API_URL)
    }

    #[must_use]
    pub fn model(&self) -> &str {
        self.model.as_deref().unwrap_or(DEFAULT_MODEL)
    }
}
