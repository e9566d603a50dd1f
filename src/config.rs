// src/config.rs

//! Application configuration.
//!
//! Built once from the environment at startup and passed by reference into
//! each component. Every value has a documented default; the Telegram
//! credentials default to placeholder sentinels that disable the chat sink.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use crate::error::{AppError, Result};

/// Sentinel value meaning "no bot token was provided".
pub const TOKEN_PLACEHOLDER: &str = "YOUR_BOT_TOKEN_HERE";

/// Sentinel value meaning "no chat id was provided".
pub const CHAT_ID_PLACEHOLDER: &str = "YOUR_CHAT_ID_HERE";

/// Immutable watcher configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Announcement feed endpoint (`MENWATCH_FEED_URL`)
    pub feed_url: String,

    /// Base URL for resolving relative document links (`MENWATCH_BASE_URL`)
    pub base_url: String,

    /// Path of the last-seen marker file (`MENWATCH_STATE_FILE`)
    pub state_file: PathBuf,

    /// Seconds between polling cycles (`MENWATCH_INTERVAL_SECS`)
    pub interval_secs: u64,

    /// Feed request timeout in seconds (`MENWATCH_TIMEOUT_SECS`)
    pub timeout_secs: u64,

    /// User-Agent header for HTTP requests (`MENWATCH_USER_AGENT`)
    pub user_agent: String,

    /// Telegram bot token (`TELEGRAM_BOT_TOKEN`)
    pub telegram_bot_token: String,

    /// Telegram chat id (`TELEGRAM_CHAT_ID`)
    pub telegram_chat_id: String,
}

impl Config {
    /// Build the configuration from environment variables, falling back to
    /// the documented defaults for anything unset or empty.
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            feed_url: env_or("MENWATCH_FEED_URL", defaults::feed_url),
            base_url: env_or("MENWATCH_BASE_URL", defaults::base_url),
            state_file: PathBuf::from(env_or("MENWATCH_STATE_FILE", defaults::state_file)),
            interval_secs: env_parsed("MENWATCH_INTERVAL_SECS", defaults::interval)?,
            timeout_secs: env_parsed("MENWATCH_TIMEOUT_SECS", defaults::timeout)?,
            user_agent: env_or("MENWATCH_USER_AGENT", defaults::user_agent),
            telegram_bot_token: env_or("TELEGRAM_BOT_TOKEN", defaults::telegram_bot_token),
            telegram_chat_id: env_or("TELEGRAM_CHAT_ID", defaults::telegram_chat_id),
        })
    }

    /// Validate configuration values for basic sanity.
    pub fn validate(&self) -> Result<()> {
        if let Err(e) = url::Url::parse(&self.feed_url) {
            return Err(AppError::config(format!(
                "feed URL {:?} is invalid: {e}",
                self.feed_url
            )));
        }
        if let Err(e) = url::Url::parse(&self.base_url) {
            return Err(AppError::config(format!(
                "base URL {:?} is invalid: {e}",
                self.base_url
            )));
        }
        if self.interval_secs == 0 {
            return Err(AppError::config("interval_secs must be > 0"));
        }
        if self.timeout_secs == 0 {
            return Err(AppError::config("timeout_secs must be > 0"));
        }
        if self.user_agent.trim().is_empty() {
            return Err(AppError::config("user_agent is empty"));
        }
        Ok(())
    }

    /// Whether real Telegram credentials were supplied.
    ///
    /// Placeholder or empty values mean the chat sink is skipped.
    pub fn telegram_configured(&self) -> bool {
        !self.telegram_bot_token.is_empty()
            && self.telegram_bot_token != TOKEN_PLACEHOLDER
            && !self.telegram_chat_id.is_empty()
            && self.telegram_chat_id != CHAT_ID_PLACEHOLDER
    }

    /// Pause between polling cycles.
    pub fn check_interval(&self) -> Duration {
        Duration::from_secs(self.interval_secs)
    }

    /// Timeout applied to each feed request.
    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            feed_url: defaults::feed_url(),
            base_url: defaults::base_url(),
            state_file: PathBuf::from(defaults::state_file()),
            interval_secs: defaults::interval(),
            timeout_secs: defaults::timeout(),
            user_agent: defaults::user_agent(),
            telegram_bot_token: defaults::telegram_bot_token(),
            telegram_chat_id: defaults::telegram_chat_id(),
        }
    }
}

/// Read an environment variable, treating unset and empty the same.
fn env_or(key: &str, default: fn() -> String) -> String {
    env::var(key)
        .ok()
        .filter(|v| !v.is_empty())
        .unwrap_or_else(default)
}

/// Read and parse a numeric environment variable.
fn env_parsed(key: &str, default: fn() -> u64) -> Result<u64> {
    match env::var(key) {
        Ok(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse()
            .map_err(|_| AppError::config(format!("{key} must be a number, got {raw:?}"))),
        _ => Ok(default()),
    }
}

mod defaults {
    pub fn feed_url() -> String {
        "https://www.men.gov.ma/data/announcements.json".into()
    }
    pub fn base_url() -> String {
        "https://www.men.gov.ma/".into()
    }
    pub fn state_file() -> String {
        "last_announcement_id.txt".into()
    }
    pub fn interval() -> u64 {
        10
    }
    pub fn timeout() -> u64 {
        15
    }
    pub fn user_agent() -> String {
        "Mozilla/5.0 (compatible; menwatch/0.1)".into()
    }
    pub fn telegram_bot_token() -> String {
        super::TOKEN_PLACEHOLDER.into()
    }
    pub fn telegram_chat_id() -> String {
        super::CHAT_ID_PLACEHOLDER.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_default_config_ok() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_interval() {
        let mut config = Config::default();
        config.interval_secs = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_bad_feed_url() {
        let mut config = Config::default();
        config.feed_url = "not a url".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_empty_user_agent() {
        let mut config = Config::default();
        config.user_agent = "  ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_telegram_disabled_with_placeholders() {
        let config = Config::default();
        assert!(!config.telegram_configured());
    }

    #[test]
    fn test_telegram_disabled_with_partial_credentials() {
        let mut config = Config::default();
        config.telegram_bot_token = "123456:real-token".to_string();
        assert!(!config.telegram_configured());

        config.telegram_chat_id = String::new();
        assert!(!config.telegram_configured());
    }

    #[test]
    fn test_telegram_enabled_with_real_credentials() {
        let mut config = Config::default();
        config.telegram_bot_token = "123456:real-token".to_string();
        config.telegram_chat_id = "987654".to_string();
        assert!(config.telegram_configured());
    }

    #[test]
    fn test_check_interval_matches_seconds() {
        let config = Config::default();
        assert_eq!(config.check_interval(), Duration::from_secs(10));
        assert_eq!(config.fetch_timeout(), Duration::from_secs(15));
    }
}
