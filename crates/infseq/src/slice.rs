use infseq_core::{ErrorInfo, SeqError};
use serde::{Deserialize, Serialize};

use crate::range::{RangeIndices, RangeSpec};
use crate::sequence::{boxed, LazySequence};

/// Slice bounds; every field is optional like `seq[start:stop:step]`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SliceSpec {
    /// First index, 0 when unset.
    #[serde(default)]
    pub start: Option<i64>,
    /// Exclusive bound; unset means open-ended.
    #[serde(default)]
    pub stop: Option<i64>,
    /// Stride, 1 when unset or zero.
    #[serde(default)]
    pub step: Option<i64>,
}

impl SliceSpec {
    /// `seq[start:]`
    pub fn starting_at(start: i64) -> Self {
        Self {
            start: Some(start),
            ..Self::default()
        }
    }

    /// `seq[start:stop]`
    pub fn range(start: i64, stop: i64) -> Self {
        Self {
            start: Some(start),
            stop: Some(stop),
            step: None,
        }
    }

    /// Same bounds with an explicit stride.
    pub fn with_step(self, step: i64) -> Self {
        Self {
            step: Some(step),
            ..self
        }
    }

    /// Same start and stride with an exclusive bound.
    pub fn with_stop(self, stop: i64) -> Self {
        Self {
            stop: Some(stop),
            ..self
        }
    }
}

/// Result of [`LazySequence::slice`].
pub enum Slice<'s, T> {
    /// Open-ended slice with a non-negative stride: another infinite sequence.
    Unbounded(LazySequence<'s, T>),
    /// Slice with a stop (or a negative stride): a finite, restartable view.
    Bounded(FiniteSlice<'s, T>),
}

impl<'s, T> Slice<'s, T> {
    /// Whether the slice is finite.
    pub fn is_bounded(&self) -> bool {
        matches!(self, Slice::Bounded(_))
    }

    /// The infinite sequence, if the slice was open-ended.
    pub fn into_unbounded(self) -> Option<LazySequence<'s, T>> {
        match self {
            Slice::Unbounded(sequence) => Some(sequence),
            Slice::Bounded(_) => None,
        }
    }

    /// The finite view, if the slice had a stop.
    pub fn into_bounded(self) -> Option<FiniteSlice<'s, T>> {
        match self {
            Slice::Unbounded(_) => None,
            Slice::Bounded(view) => Some(view),
        }
    }
}

/// Finite lazy view over `range(start, stop, step)` of a sequence.
///
/// Terms are read through the source's cache only when iterated; each call to
/// [`iter`](FiniteSlice::iter) starts again from the first index.
pub struct FiniteSlice<'s, T> {
    source: &'s LazySequence<'s, T>,
    range: RangeSpec,
}

impl<'s, T: Clone + 's> FiniteSlice<'s, T> {
    /// Indices covered by the view.
    pub fn range(&self) -> RangeSpec {
        self.range
    }

    /// Number of terms in the view.
    pub fn len(&self) -> usize {
        self.range.len()
    }

    /// Whether the view holds no terms.
    pub fn is_empty(&self) -> bool {
        self.range.is_empty()
    }

    /// Fresh iterator over the view.
    pub fn iter(&self) -> FiniteSliceIter<'s, T> {
        FiniteSliceIter {
            source: self.source,
            indices: RangeIndices::new(self.range),
        }
    }

    /// Materializes every term, stopping at the first failure.
    pub fn to_vec(&self) -> Result<Vec<T>, SeqError> {
        self.iter().collect()
    }
}

impl<'v, 's, T: Clone + 's> IntoIterator for &'v FiniteSlice<'s, T> {
    type Item = Result<T, SeqError>;
    type IntoIter = FiniteSliceIter<'s, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator produced by [`FiniteSlice::iter`].
pub struct FiniteSliceIter<'s, T> {
    source: &'s LazySequence<'s, T>,
    indices: RangeIndices,
}

impl<'s, T: Clone + 's> Iterator for FiniteSliceIter<'s, T> {
    type Item = Result<T, SeqError>;

    fn next(&mut self) -> Option<Self::Item> {
        let index = self.indices.next()?;
        Some(self.source.get(index))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.indices.size_hint()
    }
}

impl<'s, T: Clone + 's> ExactSizeIterator for FiniteSliceIter<'s, T> {}

fn unreachable_index(target: i128) -> SeqError {
    let code = if target < 0 {
        "negative-index"
    } else {
        "index-out-of-range"
    };
    SeqError::InvalidIndexValue(
        ErrorInfo::new(code, "slice maps onto an index outside the sequence")
            .with_context("index", target),
    )
}

impl<'a, T: Clone + 'a> LazySequence<'a, T> {
    /// Slices the sequence.
    ///
    /// Without a stop and with a non-negative stride the result is a fresh
    /// infinite sequence `i -> self[start + step * i]` with its own empty cache;
    /// it reads the parent's generator directly. With a stop the result is a
    /// finite view over `range(start, stop, step)` read through the parent's
    /// cache. A negative stride without a stop counts down to index 0
    /// inclusive, as if `stop = -1`.
    pub fn slice<'s>(&'s self, spec: SliceSpec) -> Slice<'s, T> {
        let start = spec.start.unwrap_or(0);
        let step = match spec.step {
            None | Some(0) => 1,
            Some(step) => step,
        };
        match spec.stop {
            None if step >= 0 => {
                let generator = boxed(move |_, index| {
                    let target = i128::from(step)
                        .checked_mul(i128::from(index))
                        .and_then(|offset| offset.checked_add(i128::from(start)))
                        .unwrap_or(i128::MAX);
                    let target = u64::try_from(target).map_err(|_| unreachable_index(target))?;
                    self.generate(target)
                });
                Slice::Unbounded(LazySequence::from_generator(generator, *self.options()))
            }
            stop => Slice::Bounded(FiniteSlice {
                source: self,
                range: RangeSpec {
                    start,
                    stop: stop.unwrap_or(-1),
                    step,
                },
            }),
        }
    }
}
