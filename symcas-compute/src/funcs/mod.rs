//! Numeric kernels of the functions that can appear in an expression.
//!
//! Each function is implemented as a unit `struct` with an associated `eval_static` method, so
//! that it can be called directly from Rust code:
//!
//! ```
//! use symcas_compute::funcs::trigonometry::Sin;
//! use symcas_parser::parser::ast::consts::PI;
//!
//! let result = Sin::eval_static(PI / 2.0);
//! assert!((result - 1.0).abs() < 1e-12);
//! ```
//!
//! Both evaluation and simplification go through these kernels, so a constant folded by the
//! simplifier always has the value evaluation would have produced.

pub mod miscellaneous;
pub mod round;
pub mod trigonometry;

use symcas_parser::parser::ast::{BracketKind, TrigKind};

/// Evaluates the given trigonometric function.
pub fn trig(kind: TrigKind, n: f64) -> f64 {
    use trigonometry::*;
    match kind {
        TrigKind::Sin => Sin::eval_static(n),
        TrigKind::Cos => Cos::eval_static(n),
        TrigKind::Tan => Tan::eval_static(n),
        TrigKind::Csc => Csc::eval_static(n),
        TrigKind::Sec => Sec::eval_static(n),
        TrigKind::Cot => Cot::eval_static(n),
        TrigKind::ArcSin => Asin::eval_static(n),
        TrigKind::ArcCos => Acos::eval_static(n),
        TrigKind::ArcTan => Atan::eval_static(n),
    }
}

/// Evaluates the given bracket function.
pub fn bracket(kind: BracketKind, n: f64) -> f64 {
    match kind {
        BracketKind::Floor => round::Floor::eval_static(n),
        BracketKind::Ceiling => round::Ceil::eval_static(n),
        BracketKind::Abs => miscellaneous::Abs::eval_static(n),
    }
}
