//! Session configuration, read from environment variables.
//!
//! | Variable | Default | Meaning |
//! |---|---|---|
//! | `SHOPMATCH_SEED_CATALOG` | `true` | start with the demo products |
//! | `SHOPMATCH_LOG_FORMAT` | `json` | `json` or `pretty` |
//! | `SHOPMATCH_SELLER_USERNAME` | unset | seller username, recorded on log lines |

use shopmatch_observability::LogFormat;
use thiserror::Error;

pub const SEED_CATALOG_VAR: &str = "SHOPMATCH_SEED_CATALOG";
pub const LOG_FORMAT_VAR: &str = "SHOPMATCH_LOG_FORMAT";
pub const SELLER_USERNAME_VAR: &str = "SHOPMATCH_SELLER_USERNAME";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value `{value}` for {var}: {reason}")]
    InvalidValue {
        var: &'static str,
        value: String,
        reason: String,
    },
}

/// Settings for one seller session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    pub seed_catalog: bool,
    pub log_format: LogFormat,
    pub username: Option<String>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            seed_catalog: true,
            log_format: LogFormat::Json,
            username: None,
        }
    }
}

impl SessionConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Read configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup(SEED_CATALOG_VAR) {
            config.seed_catalog = parse_bool(SEED_CATALOG_VAR, &raw)?;
        }

        if let Some(raw) = lookup(LOG_FORMAT_VAR) {
            config.log_format = raw.parse().map_err(|e| ConfigError::InvalidValue {
                var: LOG_FORMAT_VAR,
                value: raw.clone(),
                reason: format!("{e}"),
            })?;
        }

        config.username = lookup(SELLER_USERNAME_VAR)
            .map(|name| name.trim().to_string())
            .filter(|name| !name.is_empty());

        Ok(config)
    }

    pub fn with_seed_catalog(mut self, seed: bool) -> Self {
        self.seed_catalog = seed;
        self
    }

    pub fn with_log_format(mut self, format: LogFormat) -> Self {
        self.log_format = format;
        self
    }

    pub fn with_username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }
}

fn parse_bool(var: &'static str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        _ => Err(ConfigError::InvalidValue {
            var,
            value: raw.to_string(),
            reason: "expected true/false, 1/0 or yes/no".to_string(),
        }),
    }
}
