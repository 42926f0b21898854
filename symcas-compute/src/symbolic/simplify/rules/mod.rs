//! Implementation of the simplification rules.
//!
//! [`add`] and [`multiply`] contain the builders used to combine the terms of sums and the
//! factors of products. The remaining modules each rewrite one kind of node, and are called by
//! [`simplify_step`](super::simplify_step).

pub mod add;
pub mod fraction;
pub mod function;
pub mod log;
pub mod multiply;
pub mod power;
