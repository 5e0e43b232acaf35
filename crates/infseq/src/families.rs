//! Named constructors for well-known sequence families.

use infseq_core::{ErrorInfo, Numeric, SeqError};

use crate::sequence::{LazySequence, Memo};

/// Term `index` of the Fibonacci numbers, read back through `memo`.
///
/// Walks back to the latest pair of predecessors that is already resident,
/// then materializes everything after it in increasing order. Each nested
/// evaluation therefore finds its two predecessors cached, which bounds both
/// the work and the call depth regardless of how far ahead `index` is.
fn fibonacci_term<T: Numeric>(memo: &dyn Memo<T>, index: u64) -> Result<T, SeqError> {
    match index {
        0 => return Ok(T::zero()),
        1 => return Ok(T::one()),
        _ => {}
    }
    let available = |term: u64| term <= 1 || memo.is_materialized(term);
    let mut resume = index;
    while resume > 2 && !(available(resume - 1) && available(resume - 2)) {
        resume -= 1;
    }
    for term in resume..index {
        memo.recall(term)?;
    }
    // Newest predecessor last: inserting `index` must evict `index - 2`.
    let before_previous = memo.recall(index - 2)?;
    let previous = memo.recall(index - 1)?;
    previous.try_add(&before_previous)
}

impl<'a, T: Numeric + 'a> LazySequence<'a, T> {
    /// Arithmetic progression through `(0, first)` and `(1, second)`.
    ///
    /// The common difference is computed here, so an unrepresentable
    /// difference fails immediately rather than at the first access.
    pub fn from_two_points(first: T, second: T) -> Result<Self, SeqError> {
        let step = second.try_sub(&first)?;
        Ok(Self::try_from_fn(move |index| {
            first.try_add(&step.try_mul(&T::from_index(index)?)?)
        }))
    }

    /// `start + step * i`
    pub fn arithmetic_progression(step: T, start: T) -> Self {
        Self::try_from_fn(move |index| start.try_add(&step.try_mul(&T::from_index(index)?)?))
    }

    /// `start * ratio ^ i`
    pub fn geometric_progression(ratio: T, start: T) -> Self {
        Self::try_from_fn(move |index| start.try_mul(&ratio.try_powi(index)?))
    }

    /// `0, 1, 1, 2, 3, 5, 8, ...`
    pub fn fibonacci() -> Self {
        Self::from_recurrence(fibonacci_term::<T>)
    }
}

impl<'a, T: Clone + 'a> LazySequence<'a, T> {
    /// Repeats `values` forever.
    ///
    /// An empty list still builds; every access then fails with a
    /// `division-by-zero` arithmetic error, as `index mod 0` would.
    pub fn cycle(values: impl Into<Vec<T>>) -> Self {
        let values: Vec<T> = values.into();
        let length = values.len() as u64;
        Self::try_from_fn(move |index| {
            let position = index.checked_rem(length).ok_or_else(|| {
                SeqError::Arithmetic(
                    ErrorInfo::new("division-by-zero", "cycle over no values")
                        .with_context("index", index),
                )
            })?;
            Ok(values[position as usize].clone())
        })
    }
}
