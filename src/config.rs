//! Token sizing and lifetime settings.

use time::Duration;

use crate::token::MIN_BYTES_PER_TOKEN;

/// Default time a password reset stays valid for.
pub const DEFAULT_RESET_DURATION: Duration = Duration::hours(1);

/// An environment variable held a value that could not be parsed.
#[derive(Debug, thiserror::Error)]
#[error("invalid value for {var}: {value:?}")]
pub struct ConfigError {
    pub var: &'static str,
    pub value: String,
}

/// Settings shared by the session and password-reset services.
///
/// Byte counts below [`MIN_BYTES_PER_TOKEN`] are accepted here and clamped
/// when a token is generated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CredentialConfig {
    /// Random bytes behind each session token (default: `32`).
    pub session_bytes_per_token: usize,
    /// Random bytes behind each password-reset token (default: `32`).
    pub reset_bytes_per_token: usize,
    /// How long a password reset stays valid (default: one hour).
    pub reset_duration: Duration,
}

impl Default for CredentialConfig {
    fn default() -> Self {
        Self {
            session_bytes_per_token: MIN_BYTES_PER_TOKEN,
            reset_bytes_per_token: MIN_BYTES_PER_TOKEN,
            reset_duration: DEFAULT_RESET_DURATION,
        }
    }
}

impl CredentialConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                   | Default |
    /// |---------------------------|---------|
    /// | `SESSION_BYTES_PER_TOKEN` | `32`    |
    /// | `RESET_BYTES_PER_TOKEN`   | `32`    |
    /// | `RESET_DURATION_SECS`     | `3600`  |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let session_bytes_per_token =
            parse_or(&lookup, "SESSION_BYTES_PER_TOKEN", defaults.session_bytes_per_token)?;
        let reset_bytes_per_token =
            parse_or(&lookup, "RESET_BYTES_PER_TOKEN", defaults.reset_bytes_per_token)?;
        let reset_duration = match parse_or::<i64>(&lookup, "RESET_DURATION_SECS", 0)? {
            0 => defaults.reset_duration,
            secs => Duration::seconds(secs),
        };

        Ok(Self {
            session_bytes_per_token,
            reset_bytes_per_token,
            reset_duration,
        })
    }
}

fn parse_or<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    var: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    match lookup(var) {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError { var, value }),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn load(vars: &[(&str, &str)]) -> Result<CredentialConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        CredentialConfig::from_lookup(|var| vars.get(var).cloned())
    }

    #[test]
    fn defaults_apply_when_unset() {
        assert_eq!(load(&[]).unwrap(), CredentialConfig::default());
        assert_eq!(
            CredentialConfig::default().reset_duration,
            Duration::seconds(3600)
        );
    }

    #[test]
    fn reads_overrides() {
        let config = load(&[
            ("SESSION_BYTES_PER_TOKEN", "48"),
            ("RESET_BYTES_PER_TOKEN", " 64 "),
            ("RESET_DURATION_SECS", "900"),
        ])
        .unwrap();
        assert_eq!(config.session_bytes_per_token, 48);
        assert_eq!(config.reset_bytes_per_token, 64);
        assert_eq!(config.reset_duration, Duration::minutes(15));
    }

    #[test]
    fn zero_duration_means_default() {
        let config = load(&[("RESET_DURATION_SECS", "0")]).unwrap();
        assert_eq!(config.reset_duration, DEFAULT_RESET_DURATION);
    }

    #[test]
    fn rejects_garbage() {
        let err = load(&[("SESSION_BYTES_PER_TOKEN", "lots")]).unwrap_err();
        assert_eq!(err.var, "SESSION_BYTES_PER_TOKEN");
        assert_eq!(err.value, "lots");
    }
}
