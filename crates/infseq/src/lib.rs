//! Cached lazy infinite sequences.
//!
//! A [`LazySequence`] is an index-to-value generator plus a bounded LRU memo
//! cache. On top of it sit slicing, elementwise and scalar arithmetic,
//! convolution, partial reductions and named constructors for progressions,
//! cycles and the Fibonacci numbers. Every combinator is lazy: nothing is
//! evaluated until a term is requested, and arithmetic failures surface at the
//! index where they occur.
//!
//! ```
//! use infseq::{LazySequence, SliceSpec};
//!
//! let naturals = LazySequence::arithmetic_progression(1i64, 0);
//! let shifted = naturals.add_scalar(2);
//! assert_eq!(shifted.get(5).unwrap(), 7);
//!
//! let window = naturals.slice(SliceSpec::range(0, 5)).into_bounded().unwrap();
//! assert_eq!(window.to_vec().unwrap(), vec![0, 1, 2, 3, 4]);
//! ```

mod builder;
mod convolve;
mod descriptor;
mod families;
mod memo;
mod ops;
mod range;
mod reduce;
mod sequence;
mod slice;

pub use builder::SequenceBuilder;
pub use convolve::Convolution;
pub use descriptor::{SequenceDescriptor, SequenceDocument};
pub use memo::CacheStats;
pub use ops::{BinaryOp, Operand};
pub use range::{RangeIndices, RangeSpec};
pub use sequence::{Iter, LazySequence, Memo};
pub use slice::{FiniteSlice, FiniteSliceIter, Slice, SliceSpec};

/// Re-export the shared error, numeric and options surface.
pub use infseq_core::{
    ErrorInfo, Numeric, SeqError, SequenceOptions, DEFAULT_CACHE_CAPACITY, MIN_CACHE_CAPACITY,
    REPR_VALUES,
};
