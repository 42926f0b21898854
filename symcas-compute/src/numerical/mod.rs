//! Numerical evaluation of expressions.
//!
//! Every variable in an expression must be bound to a value in a [`Ctxt`](ctxt::Ctxt) for the
//! expression to be evaluated. Floating-point edge cases, such as division by zero or the
//! logarithm of a negative number, are not errors: the resulting infinities and `NaN`s propagate
//! through the rest of the computation, following IEEE 754.

pub mod ctxt;
pub mod error;
pub mod eval;
