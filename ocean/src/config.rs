//! Client configuration.
//!
//! The browser build has no process environment, so the API base is baked in
//! at compile time from `OCEAN_API_BASE`. Native builds (tools, tests) read the
//! same variable at runtime after loading `.env`.

pub const DEFAULT_API_BASE: &str = "http://localhost:5000/api";
pub const API_BASE_ENV: &str = "OCEAN_API_BASE";

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("API base URL must not be empty")]
    EmptyApiBase,

    #[error("API base URL '{0}' must start with http:// or https://")]
    InvalidScheme(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Prefix for every endpoint path, without a trailing slash
    pub api_base: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
        }
    }
}

impl ClientConfig {
    pub fn new(api_base: impl Into<String>) -> Result<Self, ConfigError> {
        let raw = api_base.into();
        let trimmed = raw.trim().trim_end_matches('/');
        if trimmed.is_empty() {
            return Err(ConfigError::EmptyApiBase);
        }
        if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
            return Err(ConfigError::InvalidScheme(trimmed.to_string()));
        }
        Ok(Self {
            api_base: trimmed.to_string(),
        })
    }

    /// Base fixed when the crate was compiled.
    pub fn from_build_env() -> Result<Self, ConfigError> {
        Self::new(option_env!("OCEAN_API_BASE").unwrap_or(DEFAULT_API_BASE))
    }

    /// Runtime lookup: `.env`, then process environment, then the build-time value.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_env() -> Result<Self, ConfigError> {
        if let Err(e) = dotenvy::dotenv() {
            if !e.not_found() {
                tracing::warn!(error = %e, "Failed to load .env file");
            }
        }
        match std::env::var(API_BASE_ENV) {
            Ok(value) => Self::new(value),
            Err(_) => Self::from_build_env(),
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.api_base, path)
    }
}
