use infseq_core::Numeric;
use serde::{Deserialize, Serialize};

use crate::sequence::{boxed, LazySequence};

/// How paired terms are combined before summation in a convolution.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Convolution {
    /// `result[n] = sum(a[i] + b[n - i] for i in 0..=n)`.
    ///
    /// The long-standing behavior of the `@` combinator, kept as the default
    /// for compatibility.
    #[default]
    Additive,
    /// `result[n] = sum(a[i] * b[n - i] for i in 0..=n)`, the Cauchy product.
    Product,
}

impl<'a, T: Numeric + 'a> LazySequence<'a, T> {
    /// Convolution-style sequence of `self` and `other`; both are read through
    /// their caches.
    pub fn convolve<'s>(
        &'s self,
        other: &'s LazySequence<'s, T>,
        kind: Convolution,
    ) -> LazySequence<'s, T> {
        let generator = boxed(move |_, index| {
            let mut total = T::zero();
            for offset in 0..=index {
                let lhs = self.value_at(offset)?;
                let rhs = other.value_at(index - offset)?;
                let term = match kind {
                    Convolution::Additive => lhs.try_add(&rhs)?,
                    Convolution::Product => lhs.try_mul(&rhs)?,
                };
                total = total.try_add(&term)?;
            }
            Ok(total)
        });
        LazySequence::from_generator(generator, *self.options())
    }

    /// [`Convolution::Additive`] convolution.
    pub fn convolve_additive<'s>(&'s self, other: &'s LazySequence<'s, T>) -> LazySequence<'s, T> {
        self.convolve(other, Convolution::Additive)
    }

    /// [`Convolution::Product`] convolution.
    pub fn convolve_product<'s>(&'s self, other: &'s LazySequence<'s, T>) -> LazySequence<'s, T> {
        self.convolve(other, Convolution::Product)
    }
}
