//! Folds over finite prefixes and ranges of a sequence.

use infseq_core::{ErrorInfo, Numeric, SeqError};

use crate::range::RangeSpec;
use crate::sequence::{boxed, LazySequence};

fn empty_reduction(what: &str) -> SeqError {
    SeqError::EmptyReduction(
        ErrorInfo::new("empty-reduction", format!("{what} of an empty range"))
            .with_hint("reduce over at least one term or use partial_sum"),
    )
}

impl<'a, T: Clone + 'a> LazySequence<'a, T> {
    /// Left fold of `func` over the first `n` terms.
    pub fn partial_reduce<F>(&self, n: u64, func: F) -> Result<T, SeqError>
    where
        F: Fn(&T, &T) -> Result<T, SeqError>,
    {
        if n == 0 {
            return Err(empty_reduction("reduce"));
        }
        let mut acc = self.value_at(0)?;
        for index in 1..n {
            acc = func(&acc, &self.value_at(index)?)?;
        }
        Ok(acc)
    }

    /// Running fold: term `n` is `partial_reduce(n + 1, func)`.
    ///
    /// Each fresh index refolds its whole prefix of `self`; the prefix terms
    /// themselves come from `self`'s cache.
    pub fn accumulate<'s, F>(&'s self, func: F) -> LazySequence<'s, T>
    where
        F: Fn(&T, &T) -> Result<T, SeqError> + 's,
    {
        let generator = boxed(move |_, index: u64| {
            self.partial_reduce(index.saturating_add(1), &func)
        });
        LazySequence::from_generator(generator, *self.options())
    }
}

impl<'a, T: Numeric + 'a> LazySequence<'a, T> {
    /// Sum of the terms at the indices of `range`; zero for an empty range.
    pub fn partial_sum(&self, range: impl Into<RangeSpec>) -> Result<T, SeqError> {
        let mut total = T::zero();
        for index in range.into().indices()? {
            total = total.try_add(&self.get(index)?)?;
        }
        Ok(total)
    }

    /// Product of the terms at the indices of `range`.
    pub fn partial_product(&self, range: impl Into<RangeSpec>) -> Result<T, SeqError> {
        let mut indices = range.into().indices()?;
        let first = indices.next().ok_or_else(|| empty_reduction("product"))?;
        let mut product = self.get(first)?;
        for index in indices {
            product = product.try_mul(&self.get(index)?)?;
        }
        Ok(product)
    }

    /// `accumulate` with addition.
    pub fn running_sum(&self) -> LazySequence<'_, T> {
        self.accumulate(T::try_add)
    }
}
