//! Simplification rules for powers.

use symcas_parser::parser::ast::Expr;
use crate::symbolic::simplify::simplify_step;
use super::multiply::build_product;

/// Powers of constants are only folded if the result is an integer smaller than this.
const MAX_FOLDED_POWER: f64 = 1000.0;

/// Simplifies the power `base ^ exp`.
///
/// - `(a/b)^p = a^p / b^p`
/// - `(b^q)^p = b^(pq)`
/// - `(ab)^p = a^p * b^p`
/// - `b^(log_b(x)) = x`
/// - a constant to a constant power is folded if the result is a small integer
/// - `b^0 = 1` and `b^1 = b`
pub fn simplify_power(base: &Expr, exp: &Expr) -> Expr {
    match base {
        Expr::Fraction(num, den) => {
            return Expr::fraction(
                Expr::power((**num).clone(), exp.clone()),
                Expr::power((**den).clone(), exp.clone()),
            );
        },
        Expr::Power(inner_base, inner_exp) => {
            return Expr::power(
                (**inner_base).clone(),
                build_product(vec![exp.clone(), (**inner_exp).clone()]),
            );
        },
        Expr::Product(factors) => {
            return build_product(
                factors.iter()
                    .map(|factor| Expr::power(factor.clone(), exp.clone()))
                    .collect(),
            );
        },
        _ => (),
    }

    match exp {
        Expr::Log(log_base, arg) if **log_base == *base => return (**arg).clone(),
        Expr::Constant(p) => {
            if let Some(b) = base.as_constant() {
                let result = b.powf(*p);
                if result.fract() == 0.0 && result < MAX_FOLDED_POWER {
                    return Expr::Constant(result);
                }
            }
            if *p == 0.0 {
                return Expr::Constant(1.0);
            }
            if *p == 1.0 {
                return base.clone();
            }
        },
        _ => (),
    }

    Expr::power(simplify_step(base), simplify_step(exp))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    fn x() -> Expr {
        Expr::Variable('x')
    }

    fn c(value: f64) -> Expr {
        Expr::Constant(value)
    }

    #[test]
    fn constant_powers() {
        assert_eq!(simplify_power(&c(2.0), &c(10.0)), Expr::power(c(2.0), c(10.0)));
        assert_eq!(simplify_power(&c(3.0), &c(4.0)), c(81.0));
        assert_eq!(simplify_power(&c(2.0), &c(-1.0)), Expr::power(c(2.0), c(-1.0)));
        assert_eq!(simplify_power(&c(4.0), &c(0.5)), c(2.0));
    }

    #[test]
    fn trivial_exponents() {
        assert_eq!(simplify_power(&x(), &c(0.0)), c(1.0));
        assert_eq!(simplify_power(&x(), &c(1.0)), x());
    }

    #[test]
    fn nested_powers_multiply_exponents() {
        let inner = Expr::power(x(), c(2.0));
        assert_eq!(simplify_power(&inner, &c(3.0)), Expr::power(x(), c(6.0)));
    }

    #[test]
    fn power_of_logarithm() {
        let exp = Expr::log(c(2.0), x());
        assert_eq!(simplify_power(&c(2.0), &exp), x());
    }
}
