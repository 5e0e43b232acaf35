//! Checked arithmetic contract delegated to by sequence combinators.
//!
//! Sequences never implement arithmetic themselves. Every combinator routes
//! through [`Numeric`], which wraps the host operators of the value type and
//! reports failures (overflow, division by zero, domain errors) as
//! [`SeqError::Arithmetic`] instead of panicking. Failures therefore surface
//! at the index where they occur, never when a combinator is built.

use std::fmt;

use crate::errors::{ErrorInfo, SeqError};

fn overflow(op: &str, lhs: &dyn fmt::Debug, rhs: &dyn fmt::Debug) -> SeqError {
    SeqError::Arithmetic(
        ErrorInfo::new("overflow", format!("{op} overflowed the value type"))
            .with_context("lhs", format!("{lhs:?}"))
            .with_context("rhs", format!("{rhs:?}")),
    )
}

fn division_by_zero(op: &str, lhs: &dyn fmt::Debug) -> SeqError {
    SeqError::Arithmetic(
        ErrorInfo::new("division-by-zero", format!("{op} by zero"))
            .with_context("lhs", format!("{lhs:?}")),
    )
}

fn negative_exponent(lhs: &dyn fmt::Debug, rhs: &dyn fmt::Debug) -> SeqError {
    SeqError::Arithmetic(
        ErrorInfo::new(
            "negative-exponent",
            "integer power requires a non-negative exponent",
        )
        .with_context("lhs", format!("{lhs:?}"))
        .with_context("rhs", format!("{rhs:?}"))
        .with_hint("use a floating point value type for fractional results"),
    )
}

fn power_domain(lhs: &dyn fmt::Debug, rhs: &dyn fmt::Debug) -> SeqError {
    SeqError::Arithmetic(
        ErrorInfo::new("power-domain", "power is undefined for these operands")
            .with_context("lhs", format!("{lhs:?}"))
            .with_context("rhs", format!("{rhs:?}")),
    )
}

fn index_out_of_range(index: u64, ty: &str) -> SeqError {
    SeqError::Arithmetic(
        ErrorInfo::new("index-out-of-range", "index does not fit the value type")
            .with_context("index", index)
            .with_context("type", ty),
    )
}

/// Value types a sequence can do arithmetic on.
pub trait Numeric: Clone + fmt::Debug + PartialEq {
    /// Additive identity.
    fn zero() -> Self;

    /// Multiplicative identity.
    fn one() -> Self;

    /// Converts a sequence index into a value, for closed-form generators.
    fn from_index(index: u64) -> Result<Self, SeqError>;

    /// Checked addition.
    fn try_add(&self, rhs: &Self) -> Result<Self, SeqError>;

    /// Checked subtraction.
    fn try_sub(&self, rhs: &Self) -> Result<Self, SeqError>;

    /// Checked multiplication.
    fn try_mul(&self, rhs: &Self) -> Result<Self, SeqError>;

    /// Division as the value type defines it (truncating for integers).
    fn try_div(&self, rhs: &Self) -> Result<Self, SeqError>;

    /// Division rounded toward negative infinity.
    fn try_floor_div(&self, rhs: &Self) -> Result<Self, SeqError>;

    /// Raises `self` to the power `rhs`.
    fn try_pow(&self, rhs: &Self) -> Result<Self, SeqError>;

    /// Raises `self` to a non-negative integral power.
    fn try_powi(&self, exp: u64) -> Result<Self, SeqError>;
}

macro_rules! impl_signed_numeric {
    ($($ty:ty),* $(,)?) => {$(
        impl Numeric for $ty {
            fn zero() -> Self {
                0
            }

            fn one() -> Self {
                1
            }

            fn from_index(index: u64) -> Result<Self, SeqError> {
                <$ty>::try_from(index).map_err(|_| index_out_of_range(index, stringify!($ty)))
            }

            fn try_add(&self, rhs: &Self) -> Result<Self, SeqError> {
                self.checked_add(*rhs).ok_or_else(|| overflow("add", self, rhs))
            }

            fn try_sub(&self, rhs: &Self) -> Result<Self, SeqError> {
                self.checked_sub(*rhs).ok_or_else(|| overflow("subtract", self, rhs))
            }

            fn try_mul(&self, rhs: &Self) -> Result<Self, SeqError> {
                self.checked_mul(*rhs).ok_or_else(|| overflow("multiply", self, rhs))
            }

            fn try_div(&self, rhs: &Self) -> Result<Self, SeqError> {
                if *rhs == 0 {
                    return Err(division_by_zero("divide", self));
                }
                self.checked_div(*rhs).ok_or_else(|| overflow("divide", self, rhs))
            }

            fn try_floor_div(&self, rhs: &Self) -> Result<Self, SeqError> {
                if *rhs == 0 {
                    return Err(division_by_zero("floor-divide", self));
                }
                let quotient = self
                    .checked_div(*rhs)
                    .ok_or_else(|| overflow("floor-divide", self, rhs))?;
                let remainder = *self % *rhs;
                if remainder != 0 && ((remainder < 0) != (*rhs < 0)) {
                    Ok(quotient - 1)
                } else {
                    Ok(quotient)
                }
            }

            fn try_pow(&self, rhs: &Self) -> Result<Self, SeqError> {
                if *rhs < 0 {
                    return Err(negative_exponent(self, rhs));
                }
                let exp = u32::try_from(*rhs).map_err(|_| overflow("power", self, rhs))?;
                self.checked_pow(exp).ok_or_else(|| overflow("power", self, rhs))
            }

            fn try_powi(&self, exp: u64) -> Result<Self, SeqError> {
                let narrowed = u32::try_from(exp).map_err(|_| overflow("power", self, &exp))?;
                self.checked_pow(narrowed).ok_or_else(|| overflow("power", self, &exp))
            }
        }
    )*};
}

macro_rules! impl_unsigned_numeric {
    ($($ty:ty),* $(,)?) => {$(
        impl Numeric for $ty {
            fn zero() -> Self {
                0
            }

            fn one() -> Self {
                1
            }

            fn from_index(index: u64) -> Result<Self, SeqError> {
                <$ty>::try_from(index).map_err(|_| index_out_of_range(index, stringify!($ty)))
            }

            fn try_add(&self, rhs: &Self) -> Result<Self, SeqError> {
                self.checked_add(*rhs).ok_or_else(|| overflow("add", self, rhs))
            }

            fn try_sub(&self, rhs: &Self) -> Result<Self, SeqError> {
                self.checked_sub(*rhs).ok_or_else(|| overflow("subtract", self, rhs))
            }

            fn try_mul(&self, rhs: &Self) -> Result<Self, SeqError> {
                self.checked_mul(*rhs).ok_or_else(|| overflow("multiply", self, rhs))
            }

            fn try_div(&self, rhs: &Self) -> Result<Self, SeqError> {
                self.checked_div(*rhs).ok_or_else(|| division_by_zero("divide", self))
            }

            fn try_floor_div(&self, rhs: &Self) -> Result<Self, SeqError> {
                self.checked_div(*rhs).ok_or_else(|| division_by_zero("floor-divide", self))
            }

            fn try_pow(&self, rhs: &Self) -> Result<Self, SeqError> {
                let exp = u32::try_from(*rhs).map_err(|_| overflow("power", self, rhs))?;
                self.checked_pow(exp).ok_or_else(|| overflow("power", self, rhs))
            }

            fn try_powi(&self, exp: u64) -> Result<Self, SeqError> {
                let narrowed = u32::try_from(exp).map_err(|_| overflow("power", self, &exp))?;
                self.checked_pow(narrowed).ok_or_else(|| overflow("power", self, &exp))
            }
        }
    )*};
}

// Floats follow IEEE semantics except that a zero divisor and a NaN power of
// non-NaN operands are reported as failures.
macro_rules! impl_float_numeric {
    ($($ty:ty),* $(,)?) => {$(
        impl Numeric for $ty {
            fn zero() -> Self {
                0.0
            }

            fn one() -> Self {
                1.0
            }

            fn from_index(index: u64) -> Result<Self, SeqError> {
                Ok(index as $ty)
            }

            fn try_add(&self, rhs: &Self) -> Result<Self, SeqError> {
                Ok(self + rhs)
            }

            fn try_sub(&self, rhs: &Self) -> Result<Self, SeqError> {
                Ok(self - rhs)
            }

            fn try_mul(&self, rhs: &Self) -> Result<Self, SeqError> {
                Ok(self * rhs)
            }

            fn try_div(&self, rhs: &Self) -> Result<Self, SeqError> {
                if *rhs == 0.0 {
                    return Err(division_by_zero("divide", self));
                }
                Ok(self / rhs)
            }

            fn try_floor_div(&self, rhs: &Self) -> Result<Self, SeqError> {
                if *rhs == 0.0 {
                    return Err(division_by_zero("floor-divide", self));
                }
                Ok((self / rhs).floor())
            }

            fn try_pow(&self, rhs: &Self) -> Result<Self, SeqError> {
                let value = self.powf(*rhs);
                if value.is_nan() && !self.is_nan() && !rhs.is_nan() {
                    return Err(power_domain(self, rhs));
                }
                Ok(value)
            }

            fn try_powi(&self, exp: u64) -> Result<Self, SeqError> {
                match i32::try_from(exp) {
                    Ok(narrowed) => Ok(self.powi(narrowed)),
                    Err(_) => Ok(self.powf(exp as $ty)),
                }
            }
        }
    )*};
}

impl_signed_numeric!(i32, i64, i128);
impl_unsigned_numeric!(u32, u64, u128);
impl_float_numeric!(f32, f64);
