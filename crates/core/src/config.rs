//! Validator runtime configuration.
//!
//! Limits are resolved once at process startup and then passed into the [`crate::Validator`].
//! Nothing in this crate reads environment variables during validation; binaries read the raw
//! values and hand them to [`ValidatorConfig::from_env_values`].

use crate::constants::{
    DEFAULT_MAX_NOTES_LENGTH, DEFAULT_MAX_STRING_LENGTH, MAX_NOTES_LENGTH_ENV,
    MAX_STRING_LENGTH_ENV,
};
use crate::error::ConfigError;

/// Validator configuration resolved at startup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidatorConfig {
    max_string_length: usize,
    max_notes_length: usize,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            max_string_length: DEFAULT_MAX_STRING_LENGTH,
            max_notes_length: DEFAULT_MAX_NOTES_LENGTH,
        }
    }
}

impl ValidatorConfig {
    /// Create a new `ValidatorConfig`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ZeroLength`] if either limit is zero.
    pub fn new(max_string_length: usize, max_notes_length: usize) -> Result<Self, ConfigError> {
        if max_string_length == 0 {
            return Err(ConfigError::ZeroLength(MAX_STRING_LENGTH_ENV));
        }
        if max_notes_length == 0 {
            return Err(ConfigError::ZeroLength(MAX_NOTES_LENGTH_ENV));
        }

        Ok(Self {
            max_string_length,
            max_notes_length,
        })
    }

    /// Build a config from optional raw environment values.
    ///
    /// `None`, empty or whitespace-only values fall back to the defaults.
    pub fn from_env_values(
        max_string_length: Option<String>,
        max_notes_length: Option<String>,
    ) -> Result<Self, ConfigError> {
        let max_string_length = parse_length(
            MAX_STRING_LENGTH_ENV,
            max_string_length,
            DEFAULT_MAX_STRING_LENGTH,
        )?;
        let max_notes_length =
            parse_length(MAX_NOTES_LENGTH_ENV, max_notes_length, DEFAULT_MAX_NOTES_LENGTH)?;

        Self::new(max_string_length, max_notes_length)
    }

    pub fn max_string_length(&self) -> usize {
        self.max_string_length
    }

    pub fn max_notes_length(&self) -> usize {
        self.max_notes_length
    }
}

fn parse_length(
    name: &'static str,
    value: Option<String>,
    default: usize,
) -> Result<usize, ConfigError> {
    let value = value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty());

    match value {
        None => Ok(default),
        Some(v) => v
            .parse::<usize>()
            .map_err(|_| ConfigError::InvalidValue { name, value: v }),
    }
}
