use crate::error::{Result, TimetableError};
use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;

pub const DEFAULT_BASE_URL: &str = "http://ras.phys.msu.ru";

/// The timetable site only serves the compact table layout to mobile browsers.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Linux; Android 7.0; SM-G930V Build/NRD90M) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/59.0.3071.125 Mobile Safari/537.36";

/// Configuration for spacing out requests with randomized delays.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DelayConfig {
    /// Minimum sleep duration in milliseconds before a request.
    pub min_delay_ms: u64,
    /// Maximum sleep duration in milliseconds before a request.
    pub max_delay_ms: u64,
    /// Whether the randomized delay is active.
    pub enabled: bool,
}

impl Default for DelayConfig {
    /// Default configuration: 500ms - 1500ms, enabled.
    fn default() -> Self {
        Self {
            min_delay_ms: 500,
            max_delay_ms: 1500,
            enabled: true,
        }
    }
}

/// Settings of a [`TimetableClient`](crate::TimetableClient).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Scheme and host of the timetable site, without a trailing slash.
    pub base_url: String,
    pub user_agent: String,
    pub delay: DelayConfig,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            delay: DelayConfig::default(),
        }
    }
}

impl ClientConfig {
    /// Builds a configuration from the defaults, overridden by environment
    /// variables. A `.env` file in the working directory is loaded first if
    /// there is one.
    ///
    /// # Recognized variables:
    /// - `TIMETABLE_BASE_URL`
    /// - `TIMETABLE_USER_AGENT`
    /// - `TIMETABLE_DELAY_MIN_MS`, `TIMETABLE_DELAY_MAX_MS`
    /// - `TIMETABLE_DELAY_ENABLED` (`true` / `false`)
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(base_url) = env::var("TIMETABLE_BASE_URL") {
            config.base_url = base_url.trim_end_matches('/').to_string();
        }
        if let Ok(user_agent) = env::var("TIMETABLE_USER_AGENT") {
            config.user_agent = user_agent;
        }
        if let Some(min) = parse_var("TIMETABLE_DELAY_MIN_MS")? {
            config.delay.min_delay_ms = min;
        }
        if let Some(max) = parse_var("TIMETABLE_DELAY_MAX_MS")? {
            config.delay.max_delay_ms = max;
        }
        if let Some(enabled) = parse_var("TIMETABLE_DELAY_ENABLED")? {
            config.delay.enabled = enabled;
        }

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.delay.min_delay_ms > self.delay.max_delay_ms {
            return Err(TimetableError::Config(format!(
                "delay minimum {}ms is above maximum {}ms",
                self.delay.min_delay_ms, self.delay.max_delay_ms
            )));
        }
        if self.base_url.is_empty() {
            return Err(TimetableError::Config("base URL is empty".to_string()));
        }
        Ok(())
    }
}

fn parse_var<T: FromStr>(name: &str) -> Result<Option<T>> {
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| TimetableError::Config(format!("{} has invalid value {:?}", name, raw))),
        Err(_) => Ok(None),
    }
}
