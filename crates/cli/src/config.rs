//! CLI configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `PRICETAG_REGION` - Default region (default: france)
//! - `PRICETAG_HIDE_CENTS` - Render prices without cents
//! - `PRICETAG_HIDE_CENTS_WHEN_WHOLE` - Drop cents only when they are zero
//! - `PRICETAG_HIDE_CURRENCY` - Omit the currency symbol
//! - `PRICETAG_HIDE_SUFFIX` - Omit the HT/TTC style suffix
//! - `PRICETAG_LOG_FORMAT` - `json` for structured logs, text otherwise
//!
//! Boolean variables accept `true`/`false`, `1`/`0`, `yes`/`no` and `on`/`off`.
//! Unset boolean variables leave the region's defaults untouched.

use pricetag_core::{DisplayOptions, Region};
use thiserror::Error;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Defaults applied to every command before command-line flags.
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    /// Region used when `--region` is not given
    pub region: Region,
    /// Display flags applied to every price
    pub display: DisplayOptions,
}

impl CliConfig {
    /// Load configuration from environment variables.
    ///
    /// `main` loads the `.env` file before logging starts, so it is not read
    /// again here.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set but cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        let region = get_env_or_default("PRICETAG_REGION", "france")
            .parse::<Region>()
            .map_err(|e| ConfigError::InvalidEnvVar("PRICETAG_REGION".to_string(), e.to_string()))?;

        let display = DisplayOptions {
            hide_cents: get_optional_bool("PRICETAG_HIDE_CENTS")?,
            hide_cents_when_whole: get_optional_bool("PRICETAG_HIDE_CENTS_WHEN_WHOLE")?,
            hide_currency: get_optional_bool("PRICETAG_HIDE_CURRENCY")?,
            hide_suffix: get_optional_bool("PRICETAG_HIDE_SUFFIX")?,
        };

        Ok(Self { region, display })
    }
}

/// Whether logs should be emitted as JSON.
#[must_use]
pub fn json_logs() -> bool {
    get_optional_env("PRICETAG_LOG_FORMAT").is_some_and(|v| v.eq_ignore_ascii_case("json"))
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Get an optional boolean environment variable.
fn get_optional_bool(key: &str) -> Result<Option<bool>, ConfigError> {
    get_optional_env(key)
        .map(|value| {
            parse_bool(&value).ok_or_else(|| {
                ConfigError::InvalidEnvVar(key.to_string(), format!("not a boolean: {value}"))
            })
        })
        .transpose()
}

/// Parse a boolean flag value.
fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bool_truthy() {
        for value in ["true", "TRUE", "1", "yes", "On", " true "] {
            assert_eq!(parse_bool(value), Some(true), "{value}");
        }
    }

    #[test]
    fn test_parse_bool_falsy() {
        for value in ["false", "0", "no", "OFF"] {
            assert_eq!(parse_bool(value), Some(false), "{value}");
        }
    }

    #[test]
    fn test_parse_bool_invalid() {
        assert_eq!(parse_bool(""), None);
        assert_eq!(parse_bool("maybe"), None);
        assert_eq!(parse_bool("2"), None);
    }

    #[test]
    fn test_get_optional_bool_unset() {
        let result = get_optional_bool("PRICETAG_TEST_SURELY_UNSET_VARIABLE");
        assert_eq!(result, Ok(None));
    }

    #[test]
    fn test_from_env_uses_process_environment_only() {
        // No `.env` handling here; with no PRICETAG_* variables set the
        // defaults come back.
        if std::env::vars().any(|(key, _)| key.starts_with("PRICETAG_")) {
            return;
        }
        let config = CliConfig::from_env().unwrap();
        assert_eq!(config.region, Region::France);
        assert!(config.display.is_empty());
    }

    #[test]
    fn test_default_config() {
        let config = CliConfig::default();
        assert_eq!(config.region, Region::France);
        assert!(config.display.is_empty());
    }
}
