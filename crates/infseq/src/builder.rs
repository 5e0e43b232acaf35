use infseq_core::{ErrorInfo, Numeric, SeqError, SequenceOptions};

use crate::sequence::{boxed, Generator, LazySequence};

fn config_error(code: &str, message: &str) -> SeqError {
    SeqError::InvalidConfiguration(ErrorInfo::new(code, message))
}

/// Validating construction surface for [`LazySequence`].
///
/// Exactly one source must be supplied: a generator, a constant value, or two
/// endpoint values defining an arithmetic progression.
pub struct SequenceBuilder<'a, T> {
    generator: Option<Generator<'a, T>>,
    value: Option<T>,
    endpoints: Option<(T, T)>,
    options: SequenceOptions,
}

impl<'a, T: Numeric + 'a> Default for SequenceBuilder<'a, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T: Numeric + 'a> SequenceBuilder<'a, T> {
    /// Creates a builder with no source and default options.
    pub fn new() -> Self {
        Self {
            generator: None,
            value: None,
            endpoints: None,
            options: SequenceOptions::default(),
        }
    }

    /// Uses `generator` as the source of every term.
    pub fn generator<F>(mut self, generator: F) -> Self
    where
        F: Fn(u64) -> T + 'a,
    {
        self.generator = Some(boxed(move |_, index| Ok(generator(index))));
        self
    }

    /// Repeats `value` at every index.
    pub fn value(mut self, value: T) -> Self {
        self.value = Some(value);
        self
    }

    /// Arithmetic progression through `(0, first)` and `(1, second)`.
    pub fn endpoints(mut self, first: T, second: T) -> Self {
        self.endpoints = Some((first, second));
        self
    }

    /// Overrides the default options.
    pub fn options(mut self, options: SequenceOptions) -> Self {
        self.options = options;
        self
    }

    /// Validates the configuration and builds the sequence.
    pub fn build(self) -> Result<LazySequence<'a, T>, SeqError> {
        match (self.generator, self.value, self.endpoints) {
            (Some(generator), None, None) => {
                self.options.validate()?;
                Ok(LazySequence::from_generator(generator, self.options))
            }
            (None, Some(value), None) => LazySequence::from_value(value).with_options(self.options),
            (None, None, Some((first, second))) => {
                LazySequence::from_two_points(first, second)?.with_options(self.options)
            }
            (None, None, None) => {
                log::debug!("rejecting sequence configuration without a source");
                Err(config_error(
                    "missing-source",
                    "a generator, a value or two endpoint values is required",
                ))
            }
            (generator, value, endpoints) => {
                log::debug!("rejecting sequence configuration with several sources");
                Err(SeqError::InvalidConfiguration(
                    ErrorInfo::new(
                        "conflicting-sources",
                        "only one of generator, value or endpoints may be supplied",
                    )
                    .with_context("generator", generator.is_some())
                    .with_context("value", value.is_some())
                    .with_context("endpoints", endpoints.is_some()),
                ))
            }
        }
    }
}

impl<'a, T: Numeric + 'a> LazySequence<'a, T> {
    /// Starts a validating [`SequenceBuilder`].
    pub fn builder() -> SequenceBuilder<'a, T> {
        SequenceBuilder::new()
    }
}
