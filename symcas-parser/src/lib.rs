//! Parser and expression tree for symcas.
//!
//! The [`parser`] module turns text such as `3*x^2 + sin(x)` into an [`Expr`](parser::ast::Expr)
//! tree, which is kept in a canonical order so that equal expressions compare equal
//! structurally. The tree can be rendered back to text with [`parser::fmt`].

pub mod parser;
pub mod tokenizer;
