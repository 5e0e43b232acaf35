use std::ops::Range;

use infseq_core::{ErrorInfo, SeqError};
use serde::{Deserialize, Serialize};

fn default_step() -> i64 {
    1
}

/// Half-open integer range with a step, mirroring `range(start, stop, step)`.
///
/// A positive step counts up while below `stop`, a negative step counts down
/// while above `stop`. Bounds may be negative; indexing a sequence with a
/// negative member fails when that member is reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RangeSpec {
    /// First index produced.
    pub start: i64,
    /// Exclusive bound.
    pub stop: i64,
    /// Distance between consecutive indices; must not be zero.
    #[serde(default = "default_step")]
    pub step: i64,
}

impl RangeSpec {
    /// `start..stop` with step 1.
    pub fn new(start: i64, stop: i64) -> Self {
        Self {
            start,
            stop,
            step: 1,
        }
    }

    /// `0..stop` with step 1.
    pub fn upto(stop: i64) -> Self {
        Self::new(0, stop)
    }

    /// Returns the same bounds with another step.
    pub fn with_step(self, step: i64) -> Self {
        Self { step, ..self }
    }

    /// Number of indices the range produces.
    pub fn len(&self) -> usize {
        remaining(self.start, self.stop, self.step)
    }

    /// Whether the range produces no index at all.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterates the indices, rejecting a zero step.
    pub fn indices(&self) -> Result<RangeIndices, SeqError> {
        if self.step == 0 {
            return Err(SeqError::InvalidConfiguration(
                ErrorInfo::new("zero-step", "range step must not be zero")
                    .with_context("start", self.start)
                    .with_context("stop", self.stop),
            ));
        }
        Ok(RangeIndices::new(*self))
    }
}

impl From<Range<i64>> for RangeSpec {
    fn from(range: Range<i64>) -> Self {
        Self::new(range.start, range.end)
    }
}

fn remaining(next: i64, stop: i64, step: i64) -> usize {
    let (next, stop, step) = (i128::from(next), i128::from(stop), i128::from(step));
    let count = if step > 0 && next < stop {
        (stop - next + step - 1) / step
    } else if step < 0 && next > stop {
        (next - stop - step - 1) / -step
    } else {
        0
    };
    usize::try_from(count).unwrap_or(usize::MAX)
}

/// Iterator over the members of a [`RangeSpec`].
#[derive(Debug, Clone)]
pub struct RangeIndices {
    next: i64,
    stop: i64,
    step: i64,
}

impl RangeIndices {
    pub(crate) fn new(spec: RangeSpec) -> Self {
        Self {
            next: spec.start,
            stop: spec.stop,
            step: spec.step,
        }
    }
}

impl Iterator for RangeIndices {
    type Item = i64;

    fn next(&mut self) -> Option<i64> {
        let in_range = (self.step > 0 && self.next < self.stop)
            || (self.step < 0 && self.next > self.stop);
        if !in_range {
            return None;
        }
        let current = self.next;
        self.next = self.next.checked_add(self.step).unwrap_or(self.stop);
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = remaining(self.next, self.stop, self.step);
        (len, Some(len))
    }
}

impl ExactSizeIterator for RangeIndices {}
