//! App Configuration
//!
//! Build-time settings for the API endpoint, log level and request cache.

use chrono::TimeDelta;
use log::LevelFilter;

const DEFAULT_API_BASE_URL: &str = "http://localhost:8080";

/// Request cache defaults (stale after 5 minutes, dropped after 30, one retry)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QueryConfig {
    pub stale_time: TimeDelta,
    pub gc_time: TimeDelta,
    pub retry: u32,
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            stale_time: TimeDelta::minutes(5),
            gc_time: TimeDelta::minutes(30),
            retry: 1,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub api_base_url: String,
    pub log_level: LevelFilter,
    pub query: QueryConfig,
}

impl AppConfig {
    /// Read `STUDY_API_BASE_URL` / `STUDY_LOG_LEVEL` captured at compile time.
    pub fn from_env() -> Self {
        Self::from_values(option_env!("STUDY_API_BASE_URL"), option_env!("STUDY_LOG_LEVEL"))
    }

    fn from_values(base_url: Option<&str>, log_level: Option<&str>) -> Self {
        let api_base_url = base_url
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .unwrap_or(DEFAULT_API_BASE_URL)
            .trim_end_matches('/')
            .to_string();

        let log_level = log_level
            .and_then(|level| level.trim().parse().ok())
            .unwrap_or(if cfg!(debug_assertions) { LevelFilter::Debug } else { LevelFilter::Info });

        Self {
            api_base_url,
            log_level,
            query: QueryConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::from_values(None, None);
        assert_eq!(config.api_base_url, "http://localhost:8080");
        assert_eq!(config.query.retry, 1);
        assert_eq!(config.query.stale_time, TimeDelta::minutes(5));
    }

    #[test]
    fn test_overrides() {
        let config = AppConfig::from_values(Some(" https://api.example.com/ "), Some("warn"));
        assert_eq!(config.api_base_url, "https://api.example.com");
        assert_eq!(config.log_level, LevelFilter::Warn);
    }

    #[test]
    fn test_blank_and_invalid_values_fall_back() {
        let config = AppConfig::from_values(Some("   "), Some("loud"));
        assert_eq!(config.api_base_url, "http://localhost:8080");
        assert_ne!(config.log_level, LevelFilter::Off);
    }
}
