//! Client Configuration
//!
//! Values are baked in at build time (`MEAL_API_URL=... trunk build`) and
//! fall back to defaults that match a local development backend.

use std::fmt::Display;
use std::str::FromStr;
use std::sync::OnceLock;

use log::{info, warn, LevelFilter};

pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8000/api/";
pub const DEFAULT_TIMEOUT_MS: u32 = 5000;

static CONFIG: OnceLock<Config> = OnceLock::new();

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Always ends with `/`
    pub api_url: String,
    pub timeout_ms: u32,
    pub log_level: LevelFilter,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
            log_level: LevelFilter::Info,
        }
    }
}

impl Config {
    pub fn load() -> Self {
        Self::from_values(
            option_env!("MEAL_API_URL"),
            option_env!("MEAL_API_TIMEOUT_MS"),
            option_env!("MEAL_LOG_LEVEL"),
        )
    }

    fn from_values(api_url: Option<&str>, timeout_ms: Option<&str>, log_level: Option<&str>) -> Self {
        let api_url = match api_url.map(str::trim).filter(|url| !url.is_empty()) {
            Some(url) => normalize_base_url(url),
            None => {
                info!("[CONFIG] MEAL_API_URL not set, using default: {DEFAULT_API_URL}");
                DEFAULT_API_URL.to_string()
            }
        };

        let timeout_ms = match try_load("MEAL_API_TIMEOUT_MS", timeout_ms, DEFAULT_TIMEOUT_MS) {
            0 => {
                warn!("[CONFIG] MEAL_API_TIMEOUT_MS must be positive, using default: {DEFAULT_TIMEOUT_MS}");
                DEFAULT_TIMEOUT_MS
            }
            ms => ms,
        };

        Self {
            api_url,
            timeout_ms,
            log_level: try_load("MEAL_LOG_LEVEL", log_level, LevelFilter::Info),
        }
    }

    /// Make this the configuration returned by [`config`]. Only the first call wins.
    pub fn install(self) -> &'static Config {
        CONFIG.get_or_init(|| self)
    }
}

/// Installed configuration, or the defaults before start-up finished
pub fn config() -> &'static Config {
    CONFIG.get_or_init(Config::default)
}

fn try_load<T>(key: &str, raw: Option<&str>, default: T) -> T
where
    T: FromStr + Display,
    T::Err: Display,
{
    let Some(raw) = raw else {
        info!("[CONFIG] {key} not set, using default: {default}");
        return default;
    };
    raw.trim().parse().unwrap_or_else(|e| {
        warn!("[CONFIG] Invalid {key} value {raw:?}: {e}, using default: {default}");
        default
    })
}

fn normalize_base_url(url: &str) -> String {
    format!("{}/", url.trim_end_matches('/'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_unset() {
        assert_eq!(Config::from_values(None, None, None), Config::default());
    }

    #[test]
    fn test_values_are_parsed() {
        let config = Config::from_values(Some("https://meals.example.org/api"), Some(" 8000 "), Some("debug"));
        assert_eq!(config.api_url, "https://meals.example.org/api/");
        assert_eq!(config.timeout_ms, 8000);
        assert_eq!(config.log_level, LevelFilter::Debug);
    }

    #[test]
    fn test_invalid_values_fall_back() {
        let config = Config::from_values(Some("  "), Some("soon"), Some("loud"));
        assert_eq!(config, Config::default());
        assert_eq!(Config::from_values(None, Some("0"), None).timeout_ms, DEFAULT_TIMEOUT_MS);
    }

    #[test]
    fn test_trailing_slashes_collapse() {
        assert_eq!(normalize_base_url("http://host/api///"), "http://host/api/");
    }
}
