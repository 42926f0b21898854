use std::fmt::{Display, Formatter, Result};
use super::{
    fmt_constant,
    is_sqrt,
    join_factors,
    needs_base_brackets,
    needs_call_brackets,
    needs_exponent_brackets,
};
use crate::parser::ast::{Expr, NamedConstant};

/// Writes the arguments of a variadic function, separated by commas.
fn fmt_args(f: &mut Formatter, name: &str, args: &[Expr]) -> Result {
    write!(f, "{}(", name)?;
    for (i, arg) in args.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{}", arg)?;
    }
    write!(f, ")")
}

/// Writes a function application, dropping the brackets around simple arguments (`sinx`).
fn fmt_call(f: &mut Formatter, name: &str, arg: &Expr) -> Result {
    if needs_call_brackets(arg) {
        write!(f, "{}({})", name, arg)
    } else {
        write!(f, "{}{}", name, arg)
    }
}

impl Display for Expr {
    fn fmt(&self, f: &mut Formatter) -> Result {
        match self {
            Self::Constant(value) => fmt_constant(f, *value, NamedConstant::symbol),
            Self::Variable(symbol) => write!(f, "{}", symbol),
            Self::Sum(terms) => {
                for (i, term) in terms.iter().enumerate() {
                    // negative terms bring their own sign
                    if i > 0 && !term.is_negative() {
                        write!(f, "+")?;
                    }
                    write!(f, "{}", term)?;
                }
                Ok(())
            },
            Self::Product(factors) => {
                let factors = factors.iter()
                    .enumerate()
                    .map(|(i, factor)| {
                        let rendered = factor.to_string();
                        if matches!(factor, Self::Sum(_)) || (i > 0 && rendered.starts_with('-')) {
                            format!("({})", rendered)
                        } else {
                            rendered
                        }
                    })
                    .collect();
                write!(f, "{}", join_factors(factors, "", "·"))
            },
            Self::Fraction(num, den) => {
                write!(f, "(")?;
                if matches!(**num, Self::Sum(_)) {
                    write!(f, "({})", num)?;
                } else {
                    write!(f, "{}", num)?;
                }
                write!(f, "/")?;
                if matches!(**den, Self::Sum(_) | Self::Product(_) | Self::Fraction(..)) {
                    write!(f, "({})", den)?;
                } else {
                    write!(f, "{}", den)?;
                }
                write!(f, ")")
            },
            Self::Power(base, exponent) => {
                if is_sqrt(exponent) {
                    return write!(f, "√({})", base);
                }

                if needs_base_brackets(base) {
                    write!(f, "({})", base)?;
                } else {
                    write!(f, "{}", base)?;
                }
                write!(f, "^")?;
                if needs_exponent_brackets(exponent) {
                    write!(f, "({})", exponent)
                } else {
                    write!(f, "{}", exponent)
                }
            },
            Self::Log(base, arg) => {
                if base.is_e() {
                    return fmt_call(f, "ln", arg);
                }

                let simple_base = matches!(**base, Self::Variable(_) | Self::Constant(_));
                match (simple_base, needs_call_brackets(arg)) {
                    (true, true) => write!(f, "log_{}({})", base, arg),
                    (true, false) => write!(f, "log_{} {}", base, arg),
                    (false, true) => write!(f, "log_({})({})", base, arg),
                    (false, false) => write!(f, "log_({}) {}", base, arg),
                }
            },
            Self::Bracket(kind, arg) => {
                let (open, close) = kind.glyphs();
                write!(f, "{}{}{}", open, arg, close)
            },
            Self::Trig(kind, arg) => fmt_call(f, kind.name(), arg),
            Self::Sign(arg) => write!(f, "sign({})", arg),
            Self::Mod(dividend, divisor) => write!(f, "mod({}, {})", dividend, divisor),
            Self::Min(children) => fmt_args(f, "min", children),
            Self::Max(children) => fmt_args(f, "max", children),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;
    use crate::parser::ast::{consts::{E, PI}, BracketKind, TrigKind};

    fn x() -> Expr {
        Expr::Variable('x')
    }

    #[test]
    fn constants() {
        assert_eq!(Expr::Constant(3.0).to_string(), "3");
        assert_eq!(Expr::Constant(2.5).to_string(), "2.5");
        assert_eq!(Expr::Constant(-0.0).to_string(), "0");
        assert_eq!(Expr::Constant(PI).to_string(), "π");
        assert_eq!(Expr::Constant(E).to_string(), "e");
    }

    #[test]
    fn sum_of_signed_terms() {
        // x - 2y + 1
        let expr = Expr::sum(vec![
            x(),
            Expr::product(vec![Expr::Constant(-2.0), Expr::Variable('y')]),
            Expr::Constant(1.0),
        ]);
        assert_eq!(expr.to_string(), "-2y+x+1");

        let expr = Expr::sum(vec![x(), Expr::Constant(-3.0)]);
        assert_eq!(expr.to_string(), "x-3");
    }

    #[test]
    fn product_juxtaposes_factors() {
        let expr = -x();
        assert_eq!(expr.to_string(), "-x");

        let expr = Expr::product(vec![
            Expr::Constant(3.0),
            Expr::sum(vec![x(), Expr::Constant(1.0)]),
        ]);
        assert_eq!(expr.to_string(), "3(x+1)");

        let expr = Expr::product(vec![
            Expr::Constant(2.0),
            Expr::power(Expr::Constant(3.0), x()),
        ]);
        assert_eq!(expr.to_string(), "2·3^x");
    }

    #[test]
    fn powers_and_roots() {
        let expr = Expr::power(Expr::sum(vec![x(), Expr::Constant(1.0)]), Expr::Constant(2.0));
        assert_eq!(expr.to_string(), "(x+1)^2");

        let expr = Expr::power(x(), Expr::product(vec![Expr::Constant(2.0), Expr::Variable('y')]));
        assert_eq!(expr.to_string(), "x^(2y)");

        assert_eq!(Expr::sqrt(x()).to_string(), "√(x)");
        assert_eq!(Expr::exp(x()).to_string(), "e^x");
    }

    #[test]
    fn functions() {
        assert_eq!(Expr::trig(TrigKind::Sin, x()).to_string(), "sinx");
        assert_eq!(
            Expr::trig(TrigKind::ArcTan, Expr::sum(vec![x(), Expr::Constant(1.0)])).to_string(),
            "arctan(x+1)",
        );
        assert_eq!(Expr::ln(x()).to_string(), "lnx");
        assert_eq!(Expr::log(Expr::Constant(2.0), x()).to_string(), "log_2 x");
        assert_eq!(
            Expr::log(Expr::Constant(10.0), Expr::power(x(), Expr::Constant(2.0))).to_string(),
            "log_10(x^2)",
        );
        assert_eq!(Expr::bracket(BracketKind::Floor, x()).to_string(), "⌊x⌋");
        assert_eq!(Expr::bracket(BracketKind::Abs, x()).to_string(), "|x|");
        assert_eq!(Expr::modulo(x(), Expr::Constant(2.0)).to_string(), "mod(x, 2)");
        assert_eq!(Expr::min(vec![Expr::Constant(2.0), x()]).to_string(), "min(2, x)");
    }

    #[test]
    fn fractions() {
        assert_eq!(Expr::fraction(Expr::Constant(1.0), x()).to_string(), "(1/x)");
        let expr = Expr::fraction(
            Expr::sum(vec![x(), Expr::Constant(1.0)]),
            Expr::product(vec![Expr::Constant(2.0), x()]),
        );
        assert_eq!(expr.to_string(), "((x+1)/(2x))");
    }
}
