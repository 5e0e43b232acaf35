//! Tunable knobs shared by every sequence instance.

use serde::{Deserialize, Serialize};

use crate::errors::{ErrorInfo, SeqError};

/// Number of distinct indices a sequence memoizes before evicting.
pub const DEFAULT_CACHE_CAPACITY: usize = 1024;

/// Smallest accepted cache; recurrences read their two latest terms back.
pub const MIN_CACHE_CAPACITY: usize = 2;

/// Number of leading terms rendered by `Debug`/`Display`.
pub const REPR_VALUES: usize = 6;

fn default_cache_capacity() -> usize {
    DEFAULT_CACHE_CAPACITY
}

fn default_repr_values() -> usize {
    REPR_VALUES
}

fn config_error(code: &str, message: impl Into<String>) -> SeqError {
    SeqError::InvalidConfiguration(ErrorInfo::new(code, message))
}

/// Per-sequence configuration. Derived sequences inherit their parent's options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SequenceOptions {
    /// Maximum number of memoized `(index, value)` pairs.
    #[serde(default = "default_cache_capacity")]
    pub cache_capacity: usize,
    /// Number of leading terms shown when a sequence is formatted.
    #[serde(default = "default_repr_values")]
    pub repr_values: usize,
}

impl Default for SequenceOptions {
    fn default() -> Self {
        Self {
            cache_capacity: default_cache_capacity(),
            repr_values: default_repr_values(),
        }
    }
}

impl SequenceOptions {
    /// Returns options with the given cache capacity and default rendering.
    pub fn with_cache_capacity(cache_capacity: usize) -> Self {
        Self {
            cache_capacity,
            ..Self::default()
        }
    }

    /// Checks the options against the engine's invariants.
    pub fn validate(&self) -> Result<(), SeqError> {
        if self.cache_capacity < MIN_CACHE_CAPACITY {
            log::debug!(
                "rejecting cache capacity {} (minimum {})",
                self.cache_capacity,
                MIN_CACHE_CAPACITY
            );
            return Err(SeqError::InvalidConfiguration(
                ErrorInfo::new("cache-capacity", "cache capacity is below the minimum")
                    .with_context("cache_capacity", self.cache_capacity)
                    .with_context("minimum", MIN_CACHE_CAPACITY),
            ));
        }
        Ok(())
    }

    /// Parses and validates options from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, SeqError> {
        let options: Self =
            toml::from_str(text).map_err(|err| config_error("options-parse", err.to_string()))?;
        options.validate()?;
        Ok(options)
    }
}
