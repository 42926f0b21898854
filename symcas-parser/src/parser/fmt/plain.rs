use std::fmt::{Formatter, Result};
use super::{fmt_constant, Plain};
use crate::parser::ast::{Expr, NamedConstant};

/// Writes each child in brackets, separated by `op`, and the whole list in brackets.
fn fmt_bracketed(f: &mut Formatter, op: &str, children: &[Expr]) -> Result {
    write!(f, "(")?;
    for (i, child) in children.iter().enumerate() {
        if i > 0 {
            write!(f, "{}", op)?;
        }
        write!(f, "({})", child.as_plain())?;
    }
    write!(f, ")")
}

/// Writes a function call with comma-separated arguments.
fn fmt_args<'a>(f: &mut Formatter, name: &str, args: impl IntoIterator<Item = &'a Expr>) -> Result {
    write!(f, "{}(", name)?;
    for (i, arg) in args.into_iter().enumerate() {
        if i > 0 {
            write!(f, ",")?;
        }
        write!(f, "{}", arg.as_plain())?;
    }
    write!(f, ")")
}

impl Plain for Expr {
    fn fmt_plain(&self, f: &mut Formatter) -> Result {
        match self {
            // `NaN` and `inf` are not literals, so they are written as expressions with that value
            Self::Constant(value) if value.is_nan() => write!(f, "mod(1,0)"),
            Self::Constant(value) if value.is_infinite() => write!(f, "(({})/(0))", value.signum()),
            Self::Constant(value) => fmt_constant(f, *value, NamedConstant::name),
            Self::Variable(symbol) => write!(f, "{}", symbol),
            Self::Sum(terms) => fmt_bracketed(f, "+", terms),
            Self::Product(factors) => fmt_bracketed(f, "*", factors),
            Self::Fraction(num, den) => write!(f, "(({})/({}))", num.as_plain(), den.as_plain()),
            Self::Power(base, exponent) => write!(f, "({})^({})", base.as_plain(), exponent.as_plain()),
            Self::Log(base, arg) => {
                if base.is_e() {
                    write!(f, "ln({})", arg.as_plain())
                } else {
                    write!(f, "log_({})_({})", base.as_plain(), arg.as_plain())
                }
            },
            Self::Bracket(kind, arg) => fmt_args(f, kind.name(), [&**arg]),
            Self::Trig(kind, arg) => fmt_args(f, kind.name(), [&**arg]),
            Self::Sign(arg) => fmt_args(f, "sign", [&**arg]),
            Self::Mod(dividend, divisor) => fmt_args(f, "mod", [&**dividend, &**divisor]),
            Self::Min(children) => fmt_args(f, "min", children),
            Self::Max(children) => fmt_args(f, "max", children),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;
    use crate::parser::ast::{consts::PHI, BracketKind, TrigKind};
    use crate::parser::Parser;

    fn x() -> Expr {
        Expr::Variable('x')
    }

    #[test]
    fn operators_are_fully_bracketed() {
        let expr = Expr::sum(vec![
            Expr::product(vec![Expr::Constant(-1.0), x()]),
            Expr::Constant(2.0),
        ]);
        assert_eq!(expr.as_plain().to_string(), "((((-1)*(x)))+(2))");

        let expr = Expr::fraction(Expr::power(x(), Expr::Constant(2.0)), Expr::Constant(PHI));
        assert_eq!(expr.as_plain().to_string(), "(((x)^(2))/(phi))");
    }

    #[test]
    fn functions() {
        assert_eq!(Expr::ln(x()).as_plain().to_string(), "ln(x)");
        assert_eq!(Expr::log(Expr::Constant(2.0), x()).as_plain().to_string(), "log_(2)_(x)");
        assert_eq!(Expr::bracket(BracketKind::Ceiling, x()).as_plain().to_string(), "ceil(x)");
        assert_eq!(Expr::trig(TrigKind::ArcCos, x()).as_plain().to_string(), "arccos(x)");
        assert_eq!(Expr::modulo(x(), Expr::Constant(3.0)).as_plain().to_string(), "mod(x,3)");
        assert_eq!(Expr::max(vec![x(), Expr::Variable('y')]).as_plain().to_string(), "max(x,y)");
    }

    #[test]
    fn non_finite_constants_are_parseable() {
        assert_eq!(Expr::Constant(f64::NAN).as_plain().to_string(), "mod(1,0)");
        assert_eq!(Expr::Constant(f64::INFINITY).as_plain().to_string(), "((1)/(0))");
        assert_eq!(Expr::Constant(f64::NEG_INFINITY).as_plain().to_string(), "((-1)/(0))");

        for value in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let plain = Expr::Constant(value).as_plain().to_string();
            assert!(Parser::new(&plain).try_parse_full::<Expr>().is_ok());
        }
    }
}
