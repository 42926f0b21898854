//! Algebraic manipulation of expressions.
//!
//! # Canonical form
//!
//! A primary use case for algebraic manipulation is to reduce expressions to a canonical form, so
//! that expressions that differ only in the way they were written compare equal structurally.
//! This is done with the [`simplify()`] function, which accepts an expression and returns a
//! simplified version of it.
//!
//! Simplification applies a set of node-local rewrites (see [`mod@simplify`]) to the whole tree
//! in repeated passes, until a pass no longer changes the tree. Sums and products are rebuilt
//! through two builders, [`build_sum`] and [`build_product`], that flatten nested operators, fold
//! constants, and collect like terms and like bases.
//!
//! ```
//! use symcas_compute::symbolic::simplify;
//! use symcas_parser::parser::{ast::Expr, Parser};
//!
//! let mut parser = Parser::new("x + x + x");
//! let expr = parser.try_parse_full::<Expr>().unwrap();
//!
//! // `x + x + x = 3x`
//! assert_eq!(simplify(&expr), Expr::Product(vec![
//!     Expr::Constant(3.0),
//!     Expr::Variable('x'),
//! ]));
//! ```
//!
//! # Differentiation
//!
//! [`derivative()`] computes the exact derivative of an expression with respect to a variable.
//! The result is built with the same builders, but is not simplified; pass it through
//! [`simplify()`] to obtain its canonical form.

pub mod derivative;
pub mod simplify;

pub use derivative::{derivative, DerivativeError};
pub use simplify::{build_product, build_sum, simplify, simplify_step};
