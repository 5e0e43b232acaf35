use std::cell::RefCell;
use std::fmt;

use infseq_core::{ErrorInfo, SeqError, SequenceOptions};
use serde_json::Value;

use crate::memo::{CacheStats, MemoCache};

/// Read access to a sequence's own terms, handed to every generator.
///
/// Plain generators ignore it. Self-referential generators use it to read
/// earlier terms through the cache, which is what keeps recurrences such as
/// [`LazySequence::fibonacci`] from re-deriving their whole history.
pub trait Memo<T> {
    /// Returns the term at `index`, evaluating and caching it when missing.
    fn recall(&self, index: u64) -> Result<T, SeqError>;

    /// Reports whether `index` is resident in the cache. Does not affect recency.
    fn is_materialized(&self, index: u64) -> bool;
}

pub(crate) type Generator<'a, T> = Box<dyn Fn(&dyn Memo<T>, u64) -> Result<T, SeqError> + 'a>;

/// Boxes a closure as a generator, fixing its signature from the bound.
pub(crate) fn boxed<'a, T, F>(generator: F) -> Generator<'a, T>
where
    F: Fn(&dyn Memo<T>, u64) -> Result<T, SeqError> + 'a,
{
    Box::new(generator)
}

pub(crate) fn checked_index(index: i64) -> Result<u64, SeqError> {
    u64::try_from(index).map_err(|_| {
        SeqError::InvalidIndexValue(
            ErrorInfo::new(
                "negative-index",
                "index should be greater or equal than zero",
            )
            .with_context("index", index),
        )
    })
}

fn non_integer_key(key: &Value) -> SeqError {
    SeqError::InvalidIndexType(
        ErrorInfo::new("non-integer-index", "index should be an integer")
            .with_context("key", key),
    )
}

/// An infinite, lazily evaluated, memoized sequence.
///
/// Terms are produced on demand by a generator mapping an index to a value and
/// kept in a bounded LRU cache. Evicted terms are recomputed on the next access,
/// so the generator must be a pure function of the index (and, for recurrences,
/// of earlier terms of the same sequence).
///
/// Derived sequences borrow their parents for `'a`, reading them but never
/// mutating anything other than the parents' caches. The cache uses interior
/// mutability, so a sequence is `!Sync` and meant for single-threaded use.
pub struct LazySequence<'a, T> {
    generator: Generator<'a, T>,
    cache: RefCell<MemoCache<T>>,
    options: SequenceOptions,
}

impl<'a, T: Clone + 'a> LazySequence<'a, T> {
    pub(crate) fn from_generator(generator: Generator<'a, T>, options: SequenceOptions) -> Self {
        Self {
            generator,
            cache: RefCell::new(MemoCache::new(options.cache_capacity)),
            options,
        }
    }

    /// Constant sequence repeating `value` at every index.
    pub fn from_value(value: T) -> Self {
        Self::from_generator(
            boxed(move |_, _| Ok(value.clone())),
            SequenceOptions::default(),
        )
    }

    /// Sequence backed by a total function over the non-negative integers.
    pub fn from_fn<F>(generator: F) -> Self
    where
        F: Fn(u64) -> T + 'a,
    {
        Self::from_generator(
            boxed(move |_, index| Ok(generator(index))),
            SequenceOptions::default(),
        )
    }

    /// Sequence backed by a fallible function; failures surface from [`get`](Self::get).
    pub fn try_from_fn<F>(generator: F) -> Self
    where
        F: Fn(u64) -> Result<T, SeqError> + 'a,
    {
        Self::from_generator(
            boxed(move |_, index| generator(index)),
            SequenceOptions::default(),
        )
    }

    /// Sequence whose generator may read its own earlier terms through [`Memo`].
    ///
    /// The generator must force the terms it depends on in increasing index
    /// order before combining them, so that every nested evaluation finds its
    /// own predecessors already cached and the call depth stays bounded.
    pub fn from_recurrence<F>(generator: F) -> Self
    where
        F: Fn(&dyn Memo<T>, u64) -> Result<T, SeqError> + 'a,
    {
        Self::from_generator(boxed(generator), SequenceOptions::default())
    }

    /// Replaces the options, starting over with an empty cache.
    pub fn with_options(self, options: SequenceOptions) -> Result<Self, SeqError> {
        options.validate()?;
        Ok(Self::from_generator(self.generator, options))
    }

    /// Options this sequence was built with.
    pub fn options(&self) -> &SequenceOptions {
        &self.options
    }

    /// Snapshot of the memo cache counters.
    pub fn cache_stats(&self) -> CacheStats {
        self.cache.borrow().stats()
    }

    /// Returns the term at `index`, evaluating it on a cache miss.
    pub fn get(&self, index: i64) -> Result<T, SeqError> {
        self.value_at(checked_index(index)?)
    }

    /// Indexes with a dynamically typed key, e.g. one decoded from a request.
    ///
    /// Integers index as [`get`](Self::get) does; any other JSON value,
    /// including floats with an integral value, is an [`SeqError::InvalidIndexType`].
    pub fn lookup(&self, key: &Value) -> Result<T, SeqError> {
        match key {
            Value::Number(number) => {
                if let Some(index) = number.as_u64() {
                    self.value_at(index)
                } else if let Some(index) = number.as_i64() {
                    self.get(index)
                } else {
                    Err(non_integer_key(key))
                }
            }
            other => Err(non_integer_key(other)),
        }
    }

    /// Materializes the first `count` terms.
    pub fn head(&self, count: usize) -> Result<Vec<T>, SeqError> {
        self.iter().take(count).collect()
    }

    /// Forward cursor over the terms, starting at index 0.
    pub fn iter(&self) -> Iter<'_, 'a, T> {
        Iter {
            sequence: self,
            next_index: 0,
        }
    }

    pub(crate) fn value_at(&self, index: u64) -> Result<T, SeqError> {
        let cached = self.cache.borrow_mut().get(index);
        if let Some(value) = cached {
            return Ok(value);
        }
        // The cache must not stay borrowed here: recurrences re-enter it.
        let value = self.generate(index)?;
        self.cache.borrow_mut().insert(index, value.clone());
        Ok(value)
    }

    /// Runs the generator directly, bypassing (and not warming) the cache.
    pub(crate) fn generate(&self, index: u64) -> Result<T, SeqError> {
        (self.generator)(self, index)
    }
}

impl<'a, T: Clone + 'a> Memo<T> for LazySequence<'a, T> {
    fn recall(&self, index: u64) -> Result<T, SeqError> {
        self.value_at(index)
    }

    fn is_materialized(&self, index: u64) -> bool {
        self.cache.borrow().contains(index)
    }
}

/// Infinite cursor returned by [`LazySequence::iter`]. Not restartable.
pub struct Iter<'r, 'a, T> {
    sequence: &'r LazySequence<'a, T>,
    next_index: u64,
}

impl<'r, 'a, T: Clone + 'a> Iterator for Iter<'r, 'a, T> {
    type Item = Result<T, SeqError>;

    fn next(&mut self) -> Option<Self::Item> {
        let index = self.next_index;
        self.next_index = index.checked_add(1)?;
        Some(self.sequence.value_at(index))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

impl<'r, 'a, T: Clone + 'a> IntoIterator for &'r LazySequence<'a, T> {
    type Item = Result<T, SeqError>;
    type IntoIter = Iter<'r, 'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T: Clone + fmt::Debug + 'a> fmt::Debug for LazySequence<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<LazySequence:")?;
        for index in 0..self.options.repr_values as u64 {
            match self.value_at(index) {
                Ok(value) => write!(f, " {value:?}")?,
                Err(err) => write!(f, " <{}>", err.code())?,
            }
        }
        write!(f, " ...>")
    }
}

impl<'a, T: Clone + fmt::Debug + 'a> fmt::Display for LazySequence<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}
