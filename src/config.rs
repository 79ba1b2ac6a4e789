//! Live re-evaluation configuration
//!
//! Settings are read from the environment.

use std::env::VarError;
use std::time::Duration;
use thiserror::Error;

/// Environment variable holding the debounce delay in milliseconds.
pub const DEBOUNCE_ENV: &str = "PWD_METER_DEBOUNCE_MS";

/// Delay used when `PWD_METER_DEBOUNCE_MS` is not set.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(300);

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid PWD_METER_DEBOUNCE_MS value: {value:?} (expected milliseconds)")]
    InvalidDebounce { value: String },
    #[error("PWD_METER_DEBOUNCE_MS is not valid unicode")]
    NotUnicode,
}

/// Settings for debounced live evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LiveConfig {
    /// Quiet period after an input change before the evaluation runs.
    pub debounce: Duration,
}

impl Default for LiveConfig {
    fn default() -> Self {
        Self {
            debounce: DEFAULT_DEBOUNCE,
        }
    }
}

impl LiveConfig {
    pub fn with_debounce(debounce: Duration) -> Self {
        Self { debounce }
    }

    /// Loads the configuration from the environment.
    ///
    /// # Environment Variable
    ///
    /// `PWD_METER_DEBOUNCE_MS` sets the debounce delay. If not set, the
    /// delay defaults to 300 ms. `0` disables the delay.
    ///
    /// # Errors
    ///
    /// Returns error if the variable is set but is not a non-negative
    /// integer, or is not valid unicode.
    pub fn from_env() -> Result<Self, ConfigError> {
        let debounce = match std::env::var(DEBOUNCE_ENV) {
            Ok(raw) => parse_debounce(&raw)?,
            Err(VarError::NotPresent) => DEFAULT_DEBOUNCE,
            Err(VarError::NotUnicode(_)) => return Err(ConfigError::NotUnicode),
        };

        #[cfg(feature = "tracing")]
        tracing::info!("Live evaluation debounce: {:?}", debounce);

        Ok(Self { debounce })
    }
}

fn parse_debounce(raw: &str) -> Result<Duration, ConfigError> {
    raw.trim()
        .parse::<u64>()
        .map(Duration::from_millis)
        .map_err(|_| ConfigError::InvalidDebounce {
            value: raw.to_string(),
        })
}
