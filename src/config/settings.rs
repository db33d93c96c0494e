//! Runtime settings from environment variables.
//!
//! `.env` is loaded by `main` before [`Settings::from_env`] runs, so values may
//! come from either the process environment or that file.

use crate::errors::{Error, Result};
use std::time::Duration;

const DEFAULT_DATABASE_URL: &str = "sqlite://ghosn.sqlite?mode=rwc";
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_CONFIG_PATH: &str = "config.toml";
const DEFAULT_GEMINI_MODEL: &str = "gemini-1.5-flash";
const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com";
const DEFAULT_AI_TIMEOUT_SECS: u64 = 60;

/// Application settings
#[derive(Debug, Clone)]
pub struct Settings {
    /// SeaORM connection string
    pub database_url: String,
    /// Address the HTTP server listens on
    pub bind_addr: String,
    /// Path of the TOML file holding the catalog seed
    pub config_path: String,
    /// AI provider settings
    pub gemini: GeminiSettings,
}

/// Settings for the Gemini provider
#[derive(Debug, Clone)]
pub struct GeminiSettings {
    /// API key; AI endpoints fail with a provider error while it is unset
    pub api_key: Option<String>,
    /// Model name, e.g. `gemini-1.5-flash`
    pub model: String,
    /// Scheme and host of the Gemini API
    pub base_url: String,
    /// Upper bound for a single outbound call
    pub timeout: Duration,
}

impl Settings {
    /// Reads settings from the environment, applying defaults for anything unset.
    ///
    /// # Errors
    /// Returns [`Error::Config`] when `AI_TIMEOUT_SECS` is not a whole number.
    pub fn from_env() -> Result<Self> {
        let timeout_secs = match std::env::var("AI_TIMEOUT_SECS") {
            Ok(raw) => raw.trim().parse::<u64>().map_err(|e| Error::Config {
                message: format!("AI_TIMEOUT_SECS must be a whole number of seconds: {e}"),
            })?,
            Err(_) => DEFAULT_AI_TIMEOUT_SECS,
        };

        Ok(Self {
            database_url: env_or("DATABASE_URL", DEFAULT_DATABASE_URL),
            bind_addr: env_or("BIND_ADDR", DEFAULT_BIND_ADDR),
            config_path: env_or("CONFIG_PATH", DEFAULT_CONFIG_PATH),
            gemini: GeminiSettings {
                api_key: std::env::var("GEMINI_API_KEY")
                    .ok()
                    .map(|key| key.trim().to_string())
                    .filter(|key| !key.is_empty()),
                model: env_or("GEMINI_MODEL", DEFAULT_GEMINI_MODEL),
                base_url: env_or("GEMINI_BASE_URL", DEFAULT_GEMINI_BASE_URL),
                timeout: Duration::from_secs(timeout_secs),
            },
        })
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key)
        .ok()
        .filter(|value| !value.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}
