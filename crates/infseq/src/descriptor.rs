use infseq_core::{ErrorInfo, Numeric, SeqError, SequenceOptions};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::sequence::LazySequence;

fn parse_error(code: &str, err: impl ToString) -> SeqError {
    let message = err.to_string();
    log::debug!("rejecting sequence document: {message}");
    SeqError::InvalidConfiguration(ErrorInfo::new(code, message))
}

/// Declarative description of a sequence from one of the closed-form families.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case", deny_unknown_fields)]
pub enum SequenceDescriptor<T> {
    /// Same value at every index.
    Constant {
        /// Repeated value.
        value: T,
    },
    /// Arithmetic progression through `(0, first)` and `(1, second)`.
    TwoPoints {
        /// Term at index 0.
        first: T,
        /// Term at index 1.
        second: T,
    },
    /// `start + step * i`, `start` defaulting to zero.
    Arithmetic {
        /// Common difference.
        step: T,
        /// Term at index 0.
        start: Option<T>,
    },
    /// `start * ratio ^ i`, `start` defaulting to one.
    Geometric {
        /// Common ratio.
        ratio: T,
        /// Term at index 0.
        start: Option<T>,
    },
    /// Repetition of a list; an empty list fails on every access.
    Cycle {
        /// Values repeated in order.
        values: Vec<T>,
    },
    /// `0, 1, 1, 2, 3, 5, ...`
    Fibonacci,
}

impl<T: Numeric> SequenceDescriptor<T> {
    /// Builds the described sequence with default options.
    pub fn build<'a>(self) -> Result<LazySequence<'a, T>, SeqError>
    where
        T: 'a,
    {
        let sequence = match self {
            SequenceDescriptor::Constant { value } => LazySequence::from_value(value),
            SequenceDescriptor::TwoPoints { first, second } => {
                LazySequence::from_two_points(first, second)?
            }
            SequenceDescriptor::Arithmetic { step, start } => {
                LazySequence::arithmetic_progression(step, start.unwrap_or_else(T::zero))
            }
            SequenceDescriptor::Geometric { ratio, start } => {
                LazySequence::geometric_progression(ratio, start.unwrap_or_else(T::one))
            }
            SequenceDescriptor::Cycle { values } => LazySequence::cycle(values),
            SequenceDescriptor::Fibonacci => LazySequence::fibonacci(),
        };
        Ok(sequence)
    }
}

/// A descriptor together with the options to build it with.
///
/// ```toml
/// [sequence]
/// kind = "arithmetic"
/// step = 2
/// start = 3
///
/// [options]
/// cache_capacity = 64
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SequenceDocument<T> {
    /// What to generate.
    pub sequence: SequenceDescriptor<T>,
    /// How to cache and render it.
    #[serde(default)]
    pub options: SequenceOptions,
}

impl<T: Numeric + DeserializeOwned> SequenceDocument<T> {
    /// Parses a document from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, SeqError> {
        toml::from_str(text).map_err(|err| parse_error("document-toml", err))
    }

    /// Parses a document from JSON text.
    pub fn from_json_str(text: &str) -> Result<Self, SeqError> {
        serde_json::from_str(text).map_err(|err| parse_error("document-json", err))
    }
}

impl<T: Numeric> SequenceDocument<T> {
    /// Validates the options and builds the sequence.
    pub fn build<'a>(self) -> Result<LazySequence<'a, T>, SeqError>
    where
        T: 'a,
    {
        self.sequence.build()?.with_options(self.options)
    }
}
