//! Greeter configuration management.
//!
//! Configuration is read from environment variables, with a `.env` file
//! loaded first when present. Every variable is optional; invalid values
//! are reported instead of silently replaced.
//!
//! # Example
//!
//! ```rust,no_run
//! use greeter::config::GreeterConfig;
//!
//! let config = GreeterConfig::from_env().unwrap_or_default();
//! println!("Prompt: {}", config.prompt);
//! ```

use std::env;

use thiserror::Error;

/// Largest accepted `GREETER_REPEAT`.
pub const MAX_REPEAT: u32 = 100;

/// Configuration error types.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// An environment variable has an invalid value.
    #[error("Invalid value for {key}: {message}")]
    InvalidValue {
        /// The name of the environment variable.
        key: String,
        /// Description of why the value is invalid.
        message: String,
    },
}

/// Greeter configuration.
///
/// # Fields
///
/// - `prompt`: Text written before reading the user's name
/// - `greeting`: Word placed before the name
/// - `repeat`: How many times the greeting line is printed
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GreeterConfig {
    /// Prompt written before reading a line.
    pub prompt: String,
    /// Greeting word, e.g. `Hello`.
    pub greeting: String,
    /// Number of greeting lines to print, from 1 to [`MAX_REPEAT`].
    pub repeat: u32,
}

impl Default for GreeterConfig {
    fn default() -> Self {
        Self {
            prompt: "What is your name? ".to_string(),
            greeting: "Hello".to_string(),
            repeat: 1,
        }
    }
}

impl GreeterConfig {
    /// Loads configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `GREETER_PROMPT`: Prompt text (optional, default: "What is your name? ")
    /// - `GREETER_GREETING`: Greeting word (optional, default: "Hello")
    /// - `GREETER_REPEAT`: Lines to print, 1 to 100 (optional, default: 1)
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if a variable has an invalid value.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignores errors if file doesn't exist)
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a configuration from a key lookup function.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if a value fails to parse or
    /// validate.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let prompt = lookup("GREETER_PROMPT").unwrap_or(defaults.prompt);
        let greeting = lookup("GREETER_GREETING").unwrap_or(defaults.greeting);
        let repeat = match lookup("GREETER_REPEAT") {
            Some(raw) => parse_repeat(&raw)?,
            None => defaults.repeat,
        };

        Ok(Self {
            prompt,
            greeting,
            repeat,
        })
    }
}

fn parse_repeat(raw: &str) -> Result<u32, ConfigError> {
    let invalid = |message: String| ConfigError::InvalidValue {
        key: "GREETER_REPEAT".to_string(),
        message,
    };

    let repeat: u32 = raw
        .trim()
        .parse()
        .map_err(|error: std::num::ParseIntError| invalid(error.to_string()))?;
    if repeat == 0 {
        return Err(invalid("must be at least 1".to_string()));
    }
    if repeat > MAX_REPEAT {
        return Err(invalid(format!("must be at most {MAX_REPEAT}")));
    }
    Ok(repeat)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let values: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| ((*key).to_string(), (*value).to_string()))
            .collect();
        move |key| values.get(key).cloned()
    }

    #[rstest]
    fn test_missing_variables_use_defaults() {
        let config = GreeterConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, GreeterConfig::default());
    }

    #[rstest]
    fn test_variables_override_defaults() {
        let config = GreeterConfig::from_lookup(lookup_from(&[
            ("GREETER_PROMPT", "Name> "),
            ("GREETER_GREETING", "Hi"),
            ("GREETER_REPEAT", " 3 "),
        ]))
        .unwrap();

        assert_eq!(config.prompt, "Name> ");
        assert_eq!(config.greeting, "Hi");
        assert_eq!(config.repeat, 3);
    }

    #[rstest]
    #[case("0", "must be at least 1")]
    #[case("101", "must be at most 100")]
    #[case("4000000000", "must be at most 100")]
    #[case("many", "invalid digit found in string")]
    #[case("-2", "invalid digit found in string")]
    fn test_invalid_repeat_is_rejected(#[case] raw: &str, #[case] message: &str) {
        let lookup = lookup_from(&[("GREETER_REPEAT", raw)]);
        let error = GreeterConfig::from_lookup(lookup).unwrap_err();
        assert_eq!(
            error,
            ConfigError::InvalidValue {
                key: "GREETER_REPEAT".to_string(),
                message: message.to_string(),
            }
        );
    }

    #[rstest]
    fn test_config_error_display() {
        let error = ConfigError::InvalidValue {
            key: "GREETER_REPEAT".to_string(),
            message: "must be at least 1".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid value for GREETER_REPEAT: must be at least 1"
        );
    }

    proptest! {
        #[test]
        fn prop_repeat_in_range_is_accepted(repeat in 1..=MAX_REPEAT, padding in " {0,3}") {
            let raw = format!("{padding}{repeat}{padding}");
            let lookup = lookup_from(&[("GREETER_REPEAT", raw.as_str())]);
            let config = GreeterConfig::from_lookup(lookup).unwrap();
            prop_assert_eq!(config.repeat, repeat);
        }

        #[test]
        fn prop_repeat_above_range_is_rejected(repeat in (MAX_REPEAT + 1)..=u32::MAX) {
            let raw = repeat.to_string();
            let lookup = lookup_from(&[("GREETER_REPEAT", raw.as_str())]);
            let result = GreeterConfig::from_lookup(lookup);
            prop_assert!(result.is_err());
        }
    }
}
