use std::{env, time::Duration};

use crate::{errors::Error, Result};

pub const BOT_TOKEN_VAR: &str = "TELEGRAM_BOT_TOKEN";
pub const CHAT_ID_VAR: &str = "TELEGRAM_CHAT_ID";
pub const API_BASE_VAR: &str = "TELEGRAM_API_BASE";

pub const DEFAULT_API_BASE: &str = "https://api.telegram.org";
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Typed configuration for a probe run.
///
/// Missing credentials are not a load error: the probe itself reports them,
/// so `telegram_bot_token` / `telegram_chat_id` are `None` when absent or empty.
#[derive(Clone, Debug)]
pub struct Config {
    pub telegram_bot_token: Option<String>,
    pub telegram_chat_id: Option<String>,
    pub api_base: String,
    pub request_timeout: Duration,
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup (the process env in `load`).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        // Credentials are opaque: only the empty string counts as unset.
        let telegram_bot_token = lookup(BOT_TOKEN_VAR).filter(|s| !s.is_empty());
        let telegram_chat_id = lookup(CHAT_ID_VAR).filter(|s| !s.is_empty());

        let api_base = match lookup(API_BASE_VAR).filter(|s| !s.trim().is_empty()) {
            Some(raw) => parse_api_base(&raw)?,
            None => DEFAULT_API_BASE.to_string(),
        };

        Ok(Self {
            telegram_bot_token,
            telegram_chat_id,
            api_base,
            request_timeout: REQUEST_TIMEOUT,
        })
    }
}

fn parse_api_base(raw: &str) -> Result<String> {
    let base = raw.trim().trim_end_matches('/');
    if !(base.starts_with("https://") || base.starts_with("http://")) {
        return Err(Error::Config(format!(
            "{API_BASE_VAR} must be an http(s) URL, got {base:?}"
        )));
    }
    Ok(base.to_string())
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |k| map.get(k).cloned()
    }

    #[test]
    fn reads_credentials_and_defaults() {
        let cfg =
            Config::from_lookup(lookup_from(&[(BOT_TOKEN_VAR, "T1"), (CHAT_ID_VAR, "C1")]))
                .unwrap();
        assert_eq!(cfg.telegram_bot_token.as_deref(), Some("T1"));
        assert_eq!(cfg.telegram_chat_id.as_deref(), Some("C1"));
        assert_eq!(cfg.api_base, DEFAULT_API_BASE);
        assert_eq!(cfg.request_timeout, Duration::from_secs(10));
    }

    #[test]
    fn absent_values_are_missing() {
        let cfg = Config::from_lookup(lookup_from(&[])).unwrap();
        assert!(cfg.telegram_bot_token.is_none());
        assert!(cfg.telegram_chat_id.is_none());
    }

    #[test]
    fn empty_is_missing_but_whitespace_is_kept() {
        let cfg =
            Config::from_lookup(lookup_from(&[(BOT_TOKEN_VAR, ""), (CHAT_ID_VAR, "   ")]))
                .unwrap();
        assert!(cfg.telegram_bot_token.is_none());
        assert_eq!(cfg.telegram_chat_id.as_deref(), Some("   "));

        let cfg =
            Config::from_lookup(lookup_from(&[(BOT_TOKEN_VAR, "   "), (CHAT_ID_VAR, "C1")]))
                .unwrap();
        assert_eq!(cfg.telegram_bot_token.as_deref(), Some("   "));
    }

    #[test]
    fn api_base_trailing_slash_is_stripped() {
        let cfg =
            Config::from_lookup(lookup_from(&[(API_BASE_VAR, "http://127.0.0.1:8081/")]))
                .unwrap();
        assert_eq!(cfg.api_base, "http://127.0.0.1:8081");
    }

    #[test]
    fn blank_api_base_falls_back_to_default() {
        let cfg = Config::from_lookup(lookup_from(&[(API_BASE_VAR, "  ")])).unwrap();
        assert_eq!(cfg.api_base, DEFAULT_API_BASE);
    }

    #[test]
    fn api_base_without_scheme_is_rejected() {
        let err = Config::from_lookup(lookup_from(&[(API_BASE_VAR, "api.telegram.org")]))
            .unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }
}
