//! Environment-based configuration for the studio.
//!
//! The Gemini credential is read from `GEMINI_API_KEY`, falling back to
//! `API_KEY`. A missing credential is NOT a load error: it is carried as
//! `None` so every gateway call can fail with a renderable message instead
//! of the whole application refusing to start.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}

/// Resolved application configuration.
#[derive(Clone)]
pub struct StudioConfig {
    /// Gemini API credential, if one was present in the environment.
    pub gemini_api_key: Option<String>,
    /// Per-request HTTP timeout in seconds.
    pub request_timeout_secs: u64,
    /// Default log filter when `RUST_LOG` is unset.
    pub log_level: String,
}

impl std::fmt::Debug for StudioConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StudioConfig")
            .field(
                "gemini_api_key",
                &self.gemini_api_key.as_ref().map(|_| "[redacted]"),
            )
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("log_level", &self.log_level)
            .finish()
    }
}

/// Load configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a present value fails to parse.
pub fn load_config() -> Result<StudioConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_config_from_env()
}

/// Load configuration from variables already in the process environment.
///
/// Unlike [`load_config`], this does NOT load `.env` files, which is useful
/// for testing or when the caller manages env setup.
///
/// # Errors
///
/// Returns `ConfigError` if a present value fails to parse.
pub fn load_config_from_env() -> Result<StudioConfig, ConfigError> {
    build_config(|key| std::env::var(key))
}

/// Build configuration using the provided env-var lookup function.
///
/// This is the core parsing logic, decoupled from the actual environment so
/// it can be tested with a pure `HashMap` lookup, with no `set_var` or
/// `remove_var` needed.
fn build_config<F>(lookup: F) -> Result<StudioConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let gemini_api_key = lookup("GEMINI_API_KEY")
        .or_else(|_| lookup("API_KEY"))
        .ok()
        .filter(|key| !key.trim().is_empty());

    let request_timeout_secs = parse_u64("PROMO_REQUEST_TIMEOUT_SECS", "30")?;
    let log_level = or_default("PROMO_LOG_LEVEL", "info");

    Ok(StudioConfig {
        gemini_api_key,
        request_timeout_secs,
        log_level,
    })
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::env::VarError;

    use super::*;

    fn lookup_from_map<'a>(
        map: &'a HashMap<&'a str, &'a str>,
    ) -> impl Fn(&str) -> Result<String, VarError> + 'a {
        move |key| {
            map.get(key)
                .map(|v| (*v).to_string())
                .ok_or(VarError::NotPresent)
        }
    }

    #[test]
    fn build_config_succeeds_without_any_vars() {
        let map: HashMap<&str, &str> = HashMap::new();
        let cfg = build_config(lookup_from_map(&map)).expect("empty env should still load");
        assert!(cfg.gemini_api_key.is_none());
        assert_eq!(cfg.request_timeout_secs, 30);
        assert_eq!(cfg.log_level, "info");
    }

    #[test]
    fn build_config_prefers_gemini_api_key_over_api_key() {
        let mut map = HashMap::new();
        map.insert("GEMINI_API_KEY", "primary");
        map.insert("API_KEY", "fallback");
        let cfg = build_config(lookup_from_map(&map)).unwrap();
        assert_eq!(cfg.gemini_api_key.as_deref(), Some("primary"));
    }

    #[test]
    fn build_config_falls_back_to_api_key() {
        let mut map = HashMap::new();
        map.insert("API_KEY", "fallback");
        let cfg = build_config(lookup_from_map(&map)).unwrap();
        assert_eq!(cfg.gemini_api_key.as_deref(), Some("fallback"));
    }

    #[test]
    fn build_config_treats_blank_credential_as_absent() {
        let mut map = HashMap::new();
        map.insert("GEMINI_API_KEY", "   ");
        let cfg = build_config(lookup_from_map(&map)).unwrap();
        assert!(cfg.gemini_api_key.is_none());
    }

    #[test]
    fn build_config_parses_timeout_override() {
        let mut map = HashMap::new();
        map.insert("PROMO_REQUEST_TIMEOUT_SECS", "60");
        let cfg = build_config(lookup_from_map(&map)).unwrap();
        assert_eq!(cfg.request_timeout_secs, 60);
    }

    #[test]
    fn build_config_rejects_invalid_timeout() {
        let mut map = HashMap::new();
        map.insert("PROMO_REQUEST_TIMEOUT_SECS", "not-a-number");
        let result = build_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "PROMO_REQUEST_TIMEOUT_SECS"),
            "expected InvalidEnvVar(PROMO_REQUEST_TIMEOUT_SECS), got: {result:?}"
        );
    }

    #[test]
    fn debug_output_redacts_credential() {
        let cfg = StudioConfig {
            gemini_api_key: Some("secret-key".into()),
            request_timeout_secs: 30,
            log_level: "info".into(),
        };
        let rendered = format!("{cfg:?}");
        assert!(!rendered.contains("secret-key"), "got: {rendered}");
        assert!(rendered.contains("[redacted]"), "got: {rendered}");
    }
}
