use std::fmt::{Formatter, Result};
use super::{
    fmt_constant,
    is_sqrt,
    join_factors,
    needs_base_brackets,
    needs_call_brackets,
    Latex,
};
use crate::parser::ast::{Expr, NamedConstant};

/// Writes the expression inside `\left(` and `\right)`.
fn fmt_paren(f: &mut Formatter, expr: &Expr) -> Result {
    write!(f, "\\left({}\\right)", expr.as_display())
}

/// Writes the argument of a function in braces, bracketing compound arguments.
fn fmt_call_arg(f: &mut Formatter, arg: &Expr) -> Result {
    write!(f, "{{")?;
    if needs_call_brackets(arg) {
        fmt_paren(f, arg)?;
    } else {
        arg.fmt_latex(f)?;
    }
    write!(f, "}}")
}

/// Writes a function call with comma-separated arguments.
fn fmt_args<'a>(f: &mut Formatter, name: &str, args: impl IntoIterator<Item = &'a Expr>) -> Result {
    write!(f, "{}\\left(", name)?;
    for (i, arg) in args.into_iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        arg.fmt_latex(f)?;
    }
    write!(f, "\\right)")
}

impl Latex for Expr {
    fn fmt_latex(&self, f: &mut Formatter) -> Result {
        match self {
            Self::Constant(value) => fmt_constant(f, *value, NamedConstant::latex),
            Self::Variable(symbol) => write!(f, "{}", symbol),
            Self::Sum(terms) => {
                for (i, term) in terms.iter().enumerate() {
                    if i > 0 && !term.is_negative() {
                        write!(f, "+")?;
                    }
                    term.fmt_latex(f)?;
                }
                Ok(())
            },
            Self::Product(factors) => {
                let factors = factors.iter()
                    .enumerate()
                    .map(|(i, factor)| {
                        let rendered = factor.as_display().to_string();
                        if matches!(factor, Self::Sum(_)) || (i > 0 && rendered.starts_with('-')) {
                            format!("\\left({}\\right)", rendered)
                        } else {
                            rendered
                        }
                    })
                    .collect();
                write!(f, "{}", join_factors(factors, " ", " \\cdot "))
            },
            Self::Fraction(num, den) => {
                write!(f, "\\dfrac{{{}}}{{{}}}", num.as_display(), den.as_display())
            },
            Self::Power(base, exponent) => {
                if is_sqrt(exponent) {
                    return write!(f, "\\sqrt{{{}}}", base.as_display());
                }

                if needs_base_brackets(base) {
                    fmt_paren(f, base)?;
                } else {
                    base.fmt_latex(f)?;
                }
                write!(f, "^{{{}}}", exponent.as_display())
            },
            Self::Log(base, arg) => {
                if base.is_e() {
                    write!(f, "\\ln")?;
                } else {
                    write!(f, "\\log_{{{}}}", base.as_display())?;
                }
                fmt_call_arg(f, arg)
            },
            Self::Bracket(kind, arg) => {
                let (open, close) = kind.latex_delimiters();
                write!(f, "{}{}{}", open, arg.as_display(), close)
            },
            Self::Trig(kind, arg) => {
                let name = kind.name();
                if kind.is_inverse() {
                    // `arcsin` → `\sin^{-1}`
                    write!(f, "\\{}^{{-1}}", &name[3..])?;
                } else {
                    write!(f, "\\{}", name)?;
                }
                fmt_call_arg(f, arg)
            },
            Self::Sign(arg) => fmt_args(f, "\\operatorname{sign}", [&**arg]),
            Self::Mod(dividend, divisor) => {
                fmt_args(f, "\\operatorname{mod}", [&**dividend, &**divisor])
            },
            Self::Min(children) => fmt_args(f, "\\min", children),
            Self::Max(children) => fmt_args(f, "\\max", children),
        }
    }
}
