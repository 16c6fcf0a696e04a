// src/config.rs
use crate::errors::StudioError;
use std::time::Duration;

const DEFAULT_PROVIDER_URL: &str = "https://api.openai.com/v1/images/generations";

#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: String,
    pub redis_url: String,
    pub provider_api_key: String,
    pub provider_url: String,
    pub provider_model: String,
    pub overrides_dir: String,
    pub public_base_url: String,
    pub progress_tick: Duration,
}

impl Config {
    /// Reads the process environment. Call `dotenvy::dotenv()` first to pick
    /// up a local `.env`.
    pub fn from_env() -> Result<Self, StudioError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, StudioError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let or = |key: &str, default: &str| {
            lookup(key)
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        let provider_api_key = lookup("IMAGE_PROVIDER_API_KEY")
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| StudioError::Config("IMAGE_PROVIDER_API_KEY must be set".to_string()))?;

        let tick_ms = or("STUDIO_PROGRESS_TICK_MS", "1500");
        let tick_ms: u64 = tick_ms.parse().map_err(|_| {
            StudioError::Config(format!("STUDIO_PROGRESS_TICK_MS is not a number: {}", tick_ms))
        })?;
        if tick_ms == 0 {
            return Err(StudioError::Config(
                "STUDIO_PROGRESS_TICK_MS must be positive".to_string(),
            ));
        }

        Ok(Self {
            bind_addr: or("STUDIO_BIND_ADDR", "0.0.0.0:8080"),
            redis_url: or("REDIS_URL", "redis://127.0.0.1:6379"),
            provider_api_key,
            provider_url: or("IMAGE_PROVIDER_URL", DEFAULT_PROVIDER_URL),
            provider_model: or("IMAGE_PROVIDER_MODEL", "dall-e-3"),
            overrides_dir: or("STUDIO_OVERRIDES_DIR", "./overrides"),
            public_base_url: or("STUDIO_PUBLIC_BASE_URL", ""),
            progress_tick: Duration::from_millis(tick_ms),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> Result<Config, StudioError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_apply_when_only_the_key_is_set() {
        let config = config(&[("IMAGE_PROVIDER_API_KEY", "sk-test")]).unwrap();
        assert_eq!(config.bind_addr, "0.0.0.0:8080");
        assert_eq!(config.redis_url, "redis://127.0.0.1:6379");
        assert_eq!(config.provider_model, "dall-e-3");
        assert_eq!(config.public_base_url, "");
        assert_eq!(config.progress_tick, Duration::from_millis(1500));
    }

    #[test]
    fn missing_api_key_is_a_config_error() {
        assert!(matches!(config(&[]), Err(StudioError::Config(_))));
    }

    #[test]
    fn bad_tick_is_rejected() {
        let result = config(&[
            ("IMAGE_PROVIDER_API_KEY", "sk-test"),
            ("STUDIO_PROGRESS_TICK_MS", "soon"),
        ]);
        assert!(matches!(result, Err(StudioError::Config(_))));
    }

    #[test]
    fn overrides_are_honoured() {
        let config = config(&[
            ("IMAGE_PROVIDER_API_KEY", "sk-test"),
            ("STUDIO_BIND_ADDR", "127.0.0.1:9000"),
            ("STUDIO_PROGRESS_TICK_MS", "250"),
        ])
        .unwrap();
        assert_eq!(config.bind_addr, "127.0.0.1:9000");
        assert_eq!(config.progress_tick, Duration::from_millis(250));
    }
}
