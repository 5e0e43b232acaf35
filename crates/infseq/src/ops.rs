//! Elementwise, scalar and structural combinators.

use infseq_core::{Numeric, SeqError};
use serde::{Deserialize, Serialize};

use crate::sequence::{boxed, LazySequence};

/// Binary operators a sequence can be combined with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BinaryOp {
    /// `lhs + rhs`
    Add,
    /// `lhs - rhs`
    Subtract,
    /// `lhs * rhs`
    Multiply,
    /// `lhs / rhs`, truncating for integer value types.
    Divide,
    /// `lhs / rhs` rounded toward negative infinity.
    FloorDivide,
    /// `lhs ** rhs`
    Power,
}

impl BinaryOp {
    /// Every supported operator.
    pub const ALL: [BinaryOp; 6] = [
        BinaryOp::Add,
        BinaryOp::Subtract,
        BinaryOp::Multiply,
        BinaryOp::Divide,
        BinaryOp::FloorDivide,
        BinaryOp::Power,
    ];

    /// Applies the operator through the value type's checked arithmetic.
    pub fn apply<T: Numeric>(self, lhs: &T, rhs: &T) -> Result<T, SeqError> {
        match self {
            BinaryOp::Add => lhs.try_add(rhs),
            BinaryOp::Subtract => lhs.try_sub(rhs),
            BinaryOp::Multiply => lhs.try_mul(rhs),
            BinaryOp::Divide => lhs.try_div(rhs),
            BinaryOp::FloorDivide => lhs.try_floor_div(rhs),
            BinaryOp::Power => lhs.try_pow(rhs),
        }
    }

    /// Conventional infix spelling.
    pub fn symbol(self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Subtract => "-",
            BinaryOp::Multiply => "*",
            BinaryOp::Divide => "/",
            BinaryOp::FloorDivide => "//",
            BinaryOp::Power => "**",
        }
    }
}

/// Right-hand side of a [`LazySequence::combine`].
pub enum Operand<'s, T> {
    /// Pair terms index by index.
    Sequence(&'s LazySequence<'s, T>),
    /// Use the same value at every index.
    Scalar(T),
}

impl<'a, T: Numeric + 'a> LazySequence<'a, T> {
    /// Builds `i -> op(self[i], rhs[i])`.
    ///
    /// The left operand is read through its cache. A sequence on the right is
    /// read through its generator, so its cache is not warmed as a side effect.
    /// Nothing is evaluated here; operator failures surface from the result's
    /// [`get`](Self::get) at the failing index.
    pub fn combine<'s>(&'s self, op: BinaryOp, rhs: Operand<'s, T>) -> LazySequence<'s, T> {
        let generator = boxed(move |_, index| {
            let lhs = self.value_at(index)?;
            match &rhs {
                Operand::Sequence(other) => op.apply(&lhs, &other.generate(index)?),
                Operand::Scalar(value) => op.apply(&lhs, value),
            }
        });
        LazySequence::from_generator(generator, *self.options())
    }

    /// Elementwise sum.
    #[allow(clippy::should_implement_trait)]
    pub fn add<'s>(&'s self, rhs: &'s LazySequence<'s, T>) -> LazySequence<'s, T> {
        self.combine(BinaryOp::Add, Operand::Sequence(rhs))
    }

    /// Adds `rhs` to every term.
    pub fn add_scalar(&self, rhs: T) -> LazySequence<'_, T> {
        self.combine(BinaryOp::Add, Operand::Scalar(rhs))
    }

    /// Elementwise difference.
    pub fn subtract<'s>(&'s self, rhs: &'s LazySequence<'s, T>) -> LazySequence<'s, T> {
        self.combine(BinaryOp::Subtract, Operand::Sequence(rhs))
    }

    /// Subtracts `rhs` from every term.
    pub fn subtract_scalar(&self, rhs: T) -> LazySequence<'_, T> {
        self.combine(BinaryOp::Subtract, Operand::Scalar(rhs))
    }

    /// Elementwise product.
    pub fn multiply<'s>(&'s self, rhs: &'s LazySequence<'s, T>) -> LazySequence<'s, T> {
        self.combine(BinaryOp::Multiply, Operand::Sequence(rhs))
    }

    /// Multiplies every term by `rhs`.
    pub fn multiply_scalar(&self, rhs: T) -> LazySequence<'_, T> {
        self.combine(BinaryOp::Multiply, Operand::Scalar(rhs))
    }

    /// Elementwise quotient.
    pub fn divide<'s>(&'s self, rhs: &'s LazySequence<'s, T>) -> LazySequence<'s, T> {
        self.combine(BinaryOp::Divide, Operand::Sequence(rhs))
    }

    /// Divides every term by `rhs`.
    pub fn divide_scalar(&self, rhs: T) -> LazySequence<'_, T> {
        self.combine(BinaryOp::Divide, Operand::Scalar(rhs))
    }

    /// Elementwise floor quotient.
    pub fn floor_divide<'s>(&'s self, rhs: &'s LazySequence<'s, T>) -> LazySequence<'s, T> {
        self.combine(BinaryOp::FloorDivide, Operand::Sequence(rhs))
    }

    /// Floor-divides every term by `rhs`.
    pub fn floor_divide_scalar(&self, rhs: T) -> LazySequence<'_, T> {
        self.combine(BinaryOp::FloorDivide, Operand::Scalar(rhs))
    }

    /// Elementwise power.
    pub fn power<'s>(&'s self, rhs: &'s LazySequence<'s, T>) -> LazySequence<'s, T> {
        self.combine(BinaryOp::Power, Operand::Sequence(rhs))
    }

    /// Raises every term to `rhs`.
    pub fn power_scalar(&self, rhs: T) -> LazySequence<'_, T> {
        self.combine(BinaryOp::Power, Operand::Scalar(rhs))
    }
}

impl<'a, T: Clone + 'a> LazySequence<'a, T> {
    /// Maps every term through `func`.
    pub fn apply_function<'s, U, F>(&'s self, func: F) -> LazySequence<'s, U>
    where
        U: Clone + 's,
        F: Fn(T) -> U + 's,
    {
        let generator = boxed(move |_, index| self.value_at(index).map(&func));
        LazySequence::from_generator(generator, *self.options())
    }

    /// Puts the finite `head` in front: indices below `head.len()` come from
    /// `head`, the rest from `self` shifted by that length.
    pub fn prepended_by(&self, head: impl Into<Vec<T>>) -> LazySequence<'_, T> {
        let head: Vec<T> = head.into();
        let length = head.len() as u64;
        let generator = boxed(move |_, index| {
            if index < length {
                Ok(head[index as usize].clone())
            } else {
                self.value_at(index - length)
            }
        });
        LazySequence::from_generator(generator, *self.options())
    }
}

macro_rules! impl_sequence_operator {
    ($($trait:ident :: $method:ident => $op:expr),* $(,)?) => {$(
        impl<'s, 'a, 'b, T: Numeric + 'a + 'b> std::ops::$trait<&'s LazySequence<'b, T>>
            for &'s LazySequence<'a, T>
        {
            type Output = LazySequence<'s, T>;

            fn $method(self, rhs: &'s LazySequence<'b, T>) -> LazySequence<'s, T> {
                self.combine($op, Operand::Sequence(rhs))
            }
        }
    )*};
}

impl_sequence_operator!(
    Add::add => BinaryOp::Add,
    Sub::sub => BinaryOp::Subtract,
    Mul::mul => BinaryOp::Multiply,
    Div::div => BinaryOp::Divide,
);
