//! Runtime configuration from environment variables.
//!
//! Game rules are fixed; only presentation and diagnostics are configurable:
//!
//! - `PONG_LOG_FILE`: append log records to this file (empty = no file)
//! - `PONG_KEY_RELEASE_TIMEOUT_MS`: synthetic key-up delay for terminals that
//!   never report key releases (default 400)
//! - `PONG_NO_KEYBOARD_ENHANCEMENT`: `1` or `true` to skip requesting key
//!   release events from the terminal

use std::path::PathBuf;

use crate::input::DEFAULT_KEY_RELEASE_TIMEOUT_MS;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub log_file: Option<PathBuf>,
    pub key_release_timeout_ms: u64,
    pub keyboard_enhancement: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_file: None,
            key_release_timeout_ms: DEFAULT_KEY_RELEASE_TIMEOUT_MS,
            keyboard_enhancement: true,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary variable lookup.
    ///
    /// Missing or unparsable values fall back to the defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let log_file = lookup("PONG_LOG_FILE")
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(PathBuf::from(s)) });

        let key_release_timeout_ms = lookup("PONG_KEY_RELEASE_TIMEOUT_MS")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(DEFAULT_KEY_RELEASE_TIMEOUT_MS);

        let keyboard_enhancement = !lookup("PONG_NO_KEYBOARD_ENHANCEMENT")
            .map(|v| v == "1" || v.to_lowercase() == "true")
            .unwrap_or(false);

        Self {
            log_file,
            key_release_timeout_ms,
            keyboard_enhancement,
        }
    }
}
