//! Rendering of expressions as text.
//!
//! An expression can be rendered in three ways, selected with [`RenderMode`]:
//!
//! - [`RenderMode::Plain`]: fully bracketed text that the parser reads back into an equivalent
//! expression. Produced by [`Plain::as_plain`].
//! - [`RenderMode::Annotated`]: compact text using Unicode symbols (`π`, `√`, `⌊x⌋`). This is the
//! [`Display`](std::fmt::Display) implementation of [`Expr`].
//! - [`RenderMode::Latex`]: LaTeX source. Produced by [`Latex::as_display`].

mod annotated;
mod latex;
mod plain;

use std::fmt::{Display, Formatter, Result};
use super::ast::{Expr, NamedConstant};

/// The ways an expression can be rendered as text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderMode {
    /// Fully bracketed text that can be parsed again.
    Plain,

    /// Compact text using Unicode symbols.
    #[default]
    Annotated,

    /// LaTeX source.
    Latex,
}

/// A trait for types that can be formatted as LaTeX.
pub trait Latex {
    /// Format the value as LaTeX.
    fn fmt_latex(&self, f: &mut Formatter) -> Result;

    /// Wraps the value in a [`LatexFormatter`], which implements [`Display`].
    fn as_display(&self) -> LatexFormatter<'_, Self> {
        LatexFormatter(self)
    }
}

/// A wrapper type that implements [`Display`] for any type that implements [`Latex`].
pub struct LatexFormatter<'a, T: ?Sized>(&'a T);

impl<T: ?Sized> Display for LatexFormatter<'_, T>
where
    T: Latex,
{
    fn fmt(&self, f: &mut Formatter) -> Result {
        self.0.fmt_latex(f)
    }
}

/// A trait for types that can be formatted as plain, re-parseable text.
pub trait Plain {
    /// Format the value as plain text.
    fn fmt_plain(&self, f: &mut Formatter) -> Result;

    /// Wraps the value in a [`PlainFormatter`], which implements [`Display`].
    fn as_plain(&self) -> PlainFormatter<'_, Self> {
        PlainFormatter(self)
    }
}

/// A wrapper type that implements [`Display`] for any type that implements [`Plain`].
pub struct PlainFormatter<'a, T: ?Sized>(&'a T);

impl<T: ?Sized> Display for PlainFormatter<'_, T>
where
    T: Plain,
{
    fn fmt(&self, f: &mut Formatter) -> Result {
        self.0.fmt_plain(f)
    }
}

impl Expr {
    /// Renders the expression as text in the given mode.
    pub fn render(&self, mode: RenderMode) -> String {
        match mode {
            RenderMode::Plain => self.as_plain().to_string(),
            RenderMode::Annotated => self.to_string(),
            RenderMode::Latex => self.as_display().to_string(),
        }
    }
}

/// Formats a number, printing integers without a fractional part.
fn fmt_number(f: &mut Formatter, value: f64) -> Result {
    if value == 0.0 {
        // avoid printing `-0`
        write!(f, "0")
    } else {
        write!(f, "{}", value)
    }
}

/// Formats a constant, using `pick` to choose how a named constant is written.
fn fmt_constant(f: &mut Formatter, value: f64, pick: fn(NamedConstant) -> &'static str) -> Result {
    match NamedConstant::from_value(value) {
        Some(constant) => write!(f, "{}", pick(constant)),
        None => fmt_number(f, value),
    }
}

/// Returns true if the argument of a function written without brackets (`sinx`, `lnx`) must be
/// bracketed anyway.
fn needs_call_brackets(arg: &Expr) -> bool {
    match arg {
        Expr::Sum(_) | Expr::Product(_) | Expr::Power(..) | Expr::Fraction(..) | Expr::Log(..) => true,
        Expr::Constant(value) => *value < 0.0,
        _ => false,
    }
}

/// Returns true if the base of a power must be bracketed.
fn needs_base_brackets(base: &Expr) -> bool {
    match base {
        Expr::Variable(_) | Expr::Bracket(..) => false,
        Expr::Constant(value) => *value < 0.0,
        _ => true,
    }
}

/// Returns true if the exponent of a power must be bracketed.
fn needs_exponent_brackets(exponent: &Expr) -> bool {
    matches!(exponent, Expr::Fraction(..) | Expr::Sum(_) | Expr::Product(_) | Expr::Power(..))
}

/// Returns true if the power is a square root.
fn is_sqrt(exponent: &Expr) -> bool {
    exponent.as_constant() == Some(0.5)
}

/// Joins pre-rendered factors of a product, printing a leading `-1` as `-` and inserting
/// `separator` between factors when two digits would otherwise touch.
fn join_factors(factors: Vec<String>, space: &str, separator: &str) -> String {
    let count = factors.len();
    let mut out = String::new();
    for (i, factor) in factors.into_iter().enumerate() {
        if i == 0 && count > 1 && factor == "-1" {
            out.push('-');
            continue;
        }

        if !out.is_empty() && !out.ends_with('-') {
            let last = out.chars().last().unwrap_or(' ');
            let next = factor.chars().next().unwrap_or(' ');
            if last.is_ascii_digit() && (next.is_ascii_digit() || next == '.') {
                out.push_str(separator);
            } else {
                out.push_str(space);
            }
        }
        out.push_str(&factor);
    }
    out
}
