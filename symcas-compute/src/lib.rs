//! Evaluation, simplification, and differentiation of symcas expressions.
//!
//! Expressions are parsed with [`symcas_parser`]. The [`Equation`] type ties the pieces
//! together: it parses text, evaluates it with [`numerical`], and simplifies and differentiates it
//! with [`symbolic`].

pub mod funcs;
pub mod numerical;
pub mod symbolic;

mod equation;

pub use equation::Equation;
pub use symcas_parser::parser::fmt::RenderMode;
