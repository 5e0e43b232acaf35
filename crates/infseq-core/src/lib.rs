#![deny(missing_docs)]
#![doc = "Shared error taxonomy, checked numeric contract and options for infseq."]

pub mod errors;
pub mod numeric;
pub mod options;

pub use errors::{ErrorInfo, SeqError};
pub use numeric::Numeric;
pub use options::{SequenceOptions, DEFAULT_CACHE_CAPACITY, MIN_CACHE_CAPACITY, REPR_VALUES};
